//! Binary PPM (P6) output.

use image::RgbImage;
use std::io::{self, Write};

const MAXVAL: u8 = 255;

/// Header `P6\n<w> <h>\n255\n`, then raw RGB bytes in row-major order.
pub fn write_ppm<W: Write>(out: &mut W, img: &RgbImage) -> io::Result<()> {
    let (w, h) = img.dimensions();
    write!(out, "P6\n{w} {h}\n{MAXVAL}\n")?;
    out.write_all(img.as_raw())?;
    out.flush()
}
