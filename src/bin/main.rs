use anyhow::anyhow;
use eframe::egui;
use eframe::egui_wgpu::wgpu;
use zabah_landing::{Config, LandingApp};

const WINDOW_TITLE: &str = "ZabahSoft";
const WINDOW_WIDTH: f32 = 1280.0;
const WINDOW_HEIGHT: f32 = 800.0;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = Config::from_env();
    log::info!("starting {WINDOW_TITLE} landing page");

    eframe::run_native(
        WINDOW_TITLE,
        eframe::NativeOptions {
            renderer: eframe::Renderer::Wgpu,
            wgpu_options: eframe::egui_wgpu::WgpuConfiguration {
                // Step the particles once per display refresh.
                present_mode: wgpu::PresentMode::AutoVsync,
                ..Default::default()
            },
            initial_window_size: Some(egui::vec2(WINDOW_WIDTH, WINDOW_HEIGHT)),
            ..Default::default()
        },
        Box::new(|cc| Box::new(LandingApp::new(cc, config))),
    )
    .map_err(|err| anyhow!("failed to open the landing page window: {err}"))
}
