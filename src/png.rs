//! PNG encoding for the rendered RGB canvas.
//!
//! Writes 8-bit truecolor (colour type 2) with a `pHYs` chunk so viewers
//! and print pipelines pick up the figure's DPI.

use std::io::Write;

const SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

const METERS_PER_INCH: f64 = 0.0254;

/// Encode packed RGB pixels (3 bytes per pixel, row-major) as a PNG.
pub fn encode_rgb(pixels: &[u8], width: u32, height: u32, dpi: u32) -> Result<Vec<u8>, String> {
    let expected = width as usize * height as usize * 3;
    if pixels.len() != expected {
        return Err(format!(
            "pixel buffer is {} bytes, expected {} for {}x{}",
            pixels.len(),
            expected,
            width,
            height
        ));
    }

    let mut png = Vec::new();
    png.extend_from_slice(&SIGNATURE);

    // IHDR chunk
    let mut ihdr_data = Vec::with_capacity(13);
    ihdr_data.extend_from_slice(&width.to_be_bytes());
    ihdr_data.extend_from_slice(&height.to_be_bytes());
    ihdr_data.push(8); // bit depth
    ihdr_data.push(2); // color type (RGB)
    ihdr_data.push(0); // compression method
    ihdr_data.push(0); // filter method
    ihdr_data.push(0); // interlace method
    write_chunk(&mut png, b"IHDR", &ihdr_data);

    // pHYs chunk: pixels per metre on both axes, unit = metre
    let ppm = dpi_to_ppm(dpi);
    let mut phys_data = Vec::with_capacity(9);
    phys_data.extend_from_slice(&ppm.to_be_bytes());
    phys_data.extend_from_slice(&ppm.to_be_bytes());
    phys_data.push(1);
    write_chunk(&mut png, b"pHYs", &phys_data);

    let idat_data = deflate_idat_rgb(pixels, width as usize, height as usize)
        .map_err(|e| format!("IDAT compression failed: {}", e))?;
    write_chunk(&mut png, b"IDAT", &idat_data);

    write_chunk(&mut png, b"IEND", &[]);

    Ok(png)
}

/// Pixels per metre for a dots-per-inch value
pub fn dpi_to_ppm(dpi: u32) -> u32 {
    (dpi as f64 / METERS_PER_INCH).round() as u32
}

fn write_chunk(png: &mut Vec<u8>, chunk_type: &[u8; 4], data: &[u8]) {
    png.extend_from_slice(&(data.len() as u32).to_be_bytes());
    png.extend_from_slice(chunk_type);
    png.extend_from_slice(data);

    let mut hasher = crc32fast::Hasher::new();
    hasher.update(chunk_type);
    hasher.update(data);
    png.extend_from_slice(&hasher.finalize().to_be_bytes());
}

fn deflate_idat_rgb(pixels: &[u8], width: usize, height: usize) -> std::io::Result<Vec<u8>> {
    // Each scanline is prefixed with filter type 0 (none)
    let stride = width * 3;
    let mut uncompressed = Vec::with_capacity(height * (1 + stride));
    for row in pixels.chunks_exact(stride.max(1)).take(height) {
        uncompressed.push(0);
        uncompressed.extend_from_slice(row);
    }

    let mut encoder = flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
    encoder.write_all(&uncompressed)?;
    encoder.finish()
}
