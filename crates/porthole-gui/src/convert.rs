use image::RgbaImage;

/// Convert a decoded RGBA image to an egui ColorImage.
pub fn rgba_to_color_image(image: &RgbaImage) -> egui::ColorImage {
    let w = image.width() as usize;
    let h = image.height() as usize;
    let mut pixels = Vec::with_capacity(w * h);

    for p in image.pixels() {
        pixels.push(egui::Color32::from_rgba_unmultiplied(p[0], p[1], p[2], p[3]));
    }

    egui::ColorImage {
        size: [w, h],
        pixels,
        source_size: Default::default(),
    }
}
