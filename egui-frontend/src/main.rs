use eframe::egui;
use log::{error, info};

use sales_dashboard_egui::backend::Backend;
use sales_dashboard_egui::ui::SalesDashboardApp;

type AppResult = Result<Box<dyn eframe::App>, Box<dyn std::error::Error + Send + Sync>>;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();
    info!("Starting Sales Dashboard");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 820.0])
            .with_min_inner_size([900.0, 600.0])
            .with_title("Sales Dashboard"),
        ..Default::default()
    };

    eframe::run_native("Sales Dashboard", options, Box::new(|_cc| create_app()))
}

fn create_app() -> AppResult {
    match Backend::from_default_config() {
        Ok(backend) => {
            info!("Backend ready, launching window");
            Ok(Box::new(SalesDashboardApp::new(backend)))
        }
        Err(e) => {
            error!("Failed to initialize dashboard: {}", e);
            Err(format!("Failed to initialize dashboard: {}", e).into())
        }
    }
}
