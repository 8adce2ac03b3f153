// src/ui.rs

use shape_scatter::rendering_lib::tessellate::{CIRCLE_FILL, SQUARE_FILL};
use shape_scatter::{Scatter, Shape};

pub struct LegendEntry {
    pub label: String,
    pub color: egui::Color32,
}

/// Everything the info panel shows; built once after generation.
pub struct Legend {
    pub title: String,
    pub placed: usize,
    pub requested: u32,
    pub entries: Vec<LegendEntry>,
}

impl Legend {
    pub fn new(title: &str, scatter: &Scatter) -> Self {
        let entries = scatter
            .shapes
            .iter()
            .map(|shape| LegendEntry { label: shape.label(), color: swatch(shape) })
            .collect();
        Self {
            title: title.to_owned(),
            placed: scatter.shapes.len(),
            requested: scatter.target_count,
            entries,
        }
    }
}

fn swatch(shape: &Shape) -> egui::Color32 {
    let [r, g, b, a] = match shape {
        Shape::Circle(_) => CIRCLE_FILL,
        Shape::Square(_) => SQUARE_FILL,
    };
    egui::Rgba::from_rgba_unmultiplied(r, g, b, a).into()
}

pub fn build_ui(ctx: &egui::Context, legend: &Legend) {
    egui::Window::new(legend.title.as_str())
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-10.0, 10.0))
        .resizable(false)
        .show(ctx, |ui| {
            ui.vertical(|ui| {
                ui.label(format!("Placed {} of {} shapes", legend.placed, legend.requested));
                ui.separator();

                egui::ScrollArea::vertical().max_height(320.0).show(ui, |ui| {
                    for entry in &legend.entries {
                        ui.horizontal(|ui| {
                            let (rect, _) =
                                ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
                            ui.painter().rect_filled(rect, 2.0, entry.color);
                            ui.label(entry.label.as_str());
                        });
                    }
                });
            });
        });
}
