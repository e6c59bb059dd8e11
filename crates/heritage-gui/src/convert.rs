/// Longest edge kept when uploading a texture.
const MAX_TEXTURE_EDGE: u32 = 2048;

/// Convert a decoded image to an egui ColorImage, downscaling oversized photos.
pub fn dynamic_to_color_image(img: &image::DynamicImage) -> egui::ColorImage {
    let img = if img.width() > MAX_TEXTURE_EDGE || img.height() > MAX_TEXTURE_EDGE {
        img.thumbnail(MAX_TEXTURE_EDGE, MAX_TEXTURE_EDGE)
    } else {
        img.clone()
    };
    let rgba = img.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw())
}
