//! Headless demo: a menu panel operated by two scripted controllers.

use anyhow::{Context, Result};
use glam::Vec3;
use panelray_core::{Color, Hand, Ray, Rect, Surface, UiElement};
use panelray_interaction::{FrameDriver, SelectPhase};
use panelray_render::{SurfaceRenderer, SurfaceTexture};
use std::cell::Cell;
use std::rc::Rc;
use tracing::info;

use crate::config::DemoConfig;

const FRAME_DT: f32 = 1.0 / 72.0; // typical HMD refresh

/// Build a ray from a simulated controller toward a surface pixel.
///
/// The controller sits half a meter in front of the surface center;
/// pixels outside the canvas produce rays that miss it.
fn ray_toward_pixel(surface: &Surface, controller: Vec3, pixel_x: f32, pixel_y: f32) -> Ray {
    let scale = surface.scale();
    let local = Vec3::new(
        pixel_x * scale - surface.width() as f32 * scale * 0.5,
        (surface.height() as f32 - pixel_y) * scale - surface.height() as f32 * scale * 0.5,
        0.0,
    );
    let target = surface.transform().transform_point3(local);
    Ray::new(controller, target - controller)
}

pub fn run(cfg: &DemoConfig) -> Result<()> {
    let position = Vec3::from(cfg.surface.position);
    let surface = Surface::new(cfg.surface.width, cfg.surface.height, cfg.surface.scale)
        .context("invalid surface configuration")?
        .with_position(position);
    info!(
        width = cfg.surface.width,
        height = cfg.surface.height,
        scale = cfg.surface.scale,
        "surface created"
    );

    let presses = Rc::new(Cell::new(0u32));
    let releases = Rc::new(Cell::new(0u32));
    let elements = build_menu(&presses, &releases);

    let mut driver = FrameDriver::new(
        surface,
        SurfaceRenderer::new(cfg.background),
        cfg.repaint_policy,
    );

    let gpu = if cfg.gpu_upload {
        let (device, queue) = init_gpu()?;
        let texture = SurfaceTexture::new(&device, driver.raster(), "panelray surface");
        Some((device, queue, texture))
    } else {
        None
    };

    // The controller hovers half a meter in front of the panel.
    let controller = position + Vec3::new(0.0, 0.0, 0.5);
    let mut repaints = 0u32;
    let mut uploads = 0u32;

    for frame in 0..cfg.frames {
        let progress = frame as f32 / cfg.frames.max(1) as f32;

        // Right hand sweeps left to right across the rect's row, starting
        // and ending off-canvas.
        let sweep_x = -200.0 + progress * (cfg.surface.width as f32 + 400.0);
        let right = Some(ray_toward_pixel(&surface, controller, sweep_x, 150.0));

        // Left hand joins mid-run, parked over the menu rect.
        let left = (progress > 0.4 && progress < 0.8)
            .then(|| ray_toward_pixel(&surface, controller, 150.0, 150.0));

        let report = driver.frame(FRAME_DT, [left, right], &elements);
        if report.repainted {
            repaints += 1;
        }

        // The left hand squeezes its trigger halfway through its visit.
        if progress > 0.55 && progress <= 0.55 + 1.0 / cfg.frames.max(1) as f32 {
            driver.select(Hand::Left, SelectPhase::Start, &elements);
            driver.select(Hand::Left, SelectPhase::End, &elements);
        }

        if let Some((_, queue, texture)) = &gpu {
            if texture.upload_if_dirty(queue, driver.raster_mut()) {
                uploads += 1;
            }
        }
    }

    info!(
        frames = cfg.frames,
        repaints,
        uploads,
        presses = presses.get(),
        releases = releases.get(),
        "demo finished"
    );
    Ok(())
}

/// The menu from the demo scene: a hoverable rect and a labeled button
/// sharing its footprint.
fn build_menu(presses: &Rc<Cell<u32>>, releases: &Rc<Cell<u32>>) -> Vec<UiElement> {
    let on_press = Rc::clone(presses);
    let on_release = Rc::clone(releases);
    vec![
        UiElement::rect(Rect::new(100.0, 100.0, 100.0, 100.0), Color::WHITE)
            .with_hover_color(Color::BLACK)
            .with_on_select_start(move || {
                info!("menu rect pressed");
                on_press.set(on_press.get() + 1);
            })
            .with_on_select_end(move || on_release.set(on_release.get() + 1)),
        UiElement::button(Rect::new(100.0, 100.0, 100.0, 100.0), Color::BLACK, "Start"),
    ]
}

fn init_gpu() -> Result<(wgpu::Device, wgpu::Queue)> {
    let instance = wgpu::Instance::default();
    let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions::default()))
        .context("no compatible GPU adapter")?;
    let (device, queue) =
        pollster::block_on(adapter.request_device(&wgpu::DeviceDescriptor::default(), None))?;
    Ok((device, queue))
}
