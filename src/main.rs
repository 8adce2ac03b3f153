// src/main.rs

pub mod app;
pub mod ui;

use log::{error, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use winit::{
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop, EventLoopWindowTarget},
    window::WindowBuilder,
};

use app::ScatterApp;
use shape_scatter::config::{parse_seed, SEED_ENV_VAR};
use shape_scatter::{DisplayConfig, ScatterConfig, ShapeGenerator};

fn run_seed() -> u64 {
    let value = std::env::var(SEED_ENV_VAR).ok();
    match parse_seed(value.as_deref()) {
        Some(seed) => seed,
        None => {
            if let Some(raw) = value {
                warn!("ignoring unparsable {}={:?}", SEED_ENV_VAR, raw);
            }
            rand::random()
        }
    }
}

pub async fn run() -> anyhow::Result<()> {
    cfg_if::cfg_if! {
        if #[cfg(target_arch = "wasm32")] {
            std::panic::set_hook(Box::new(console_error_panic_hook::hook));
            console_log::init_with_level(log::Level::Warn)?;
        } else {
            env_logger::init();
        }
    }

    let config = ScatterConfig::default();
    let display = DisplayConfig::for_canvas(&config.bounds);

    let seed = run_seed();
    let mut rng = StdRng::seed_from_u64(seed);
    let scatter = ShapeGenerator::scatter(&mut rng, &config)?;
    info!(
        "seed {}: placed {} of {} shapes ({} skipped)",
        seed,
        scatter.shapes.len(),
        scatter.target_count,
        scatter.skipped()
    );

    let event_loop = EventLoop::new()?;
    let window = std::sync::Arc::new(
        WindowBuilder::new()
            .with_title(display.title.as_str())
            .with_inner_size(winit::dpi::LogicalSize::new(display.window_width, display.window_height))
            .build(&event_loop)?,
    );

    #[cfg(target_arch = "wasm32")]
    {
        use winit::platform::web::WindowExtWebSys;
        web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| {
                let dst = doc.get_element_by_id("wasm-viewport")?;
                let canvas = web_sys::Element::from(window.canvas()?);
                dst.append_child(&canvas).ok()?;
                Some(())
            })
            .ok_or_else(|| anyhow::anyhow!("couldn't append canvas to document body"))?;
    }

    let mut app_state = ScatterApp::new(window.clone(), &scatter, &config.bounds, &display).await?;
    window.request_redraw();

    event_loop.run(move |event, target: &EventLoopWindowTarget<()>| {
        target.set_control_flow(ControlFlow::Wait);

        match event {
            Event::WindowEvent { ref event, window_id } if window_id == window.id() => {
                let (consumed, repaint) = app_state.handle_window_event(event, &window);
                if repaint {
                    window.request_redraw();
                }
                if consumed {
                    return;
                }
                match event {
                    WindowEvent::CloseRequested => target.exit(),
                    WindowEvent::Resized(physical_size) => {
                        app_state.resize(*physical_size);
                        window.request_redraw();
                    }
                    WindowEvent::RedrawRequested => match app_state.render(&window) {
                        Ok(_) => {}
                        Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                            app_state.resize(app_state.get_size());
                            window.request_redraw();
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => {
                            error!("WGPU out of memory, exiting");
                            target.exit();
                        }
                        Err(e) => warn!("surface error: {:?}", e),
                    },
                    _ => {}
                }
            }
            _ => {}
        }
    })?;

    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    wasm_bindgen_futures::spawn_local(async {
        if let Err(e) = run().await {
            error!("{:#}", e);
        }
    });
}
