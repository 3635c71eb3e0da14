//! Separable Gaussian blur for shadow layers

use tiny_skia::{Pixmap, PremultipliedColorU8};

/// Normalized 1-D kernel for `sigma`, and its radius (`ceil(3 * sigma)`)
pub(crate) fn gaussian_kernel(sigma: f32) -> (Vec<f32>, usize) {
    let radius = (sigma.abs() * 3.0).ceil() as usize;
    if radius == 0 {
        return (Vec::new(), 0);
    }

    let two_sigma_sq = 2.0 * sigma * sigma;
    let mut kernel: Vec<f32> = (0..=radius * 2)
        .map(|i| {
            let x = i as f32 - radius as f32;
            (-x * x / two_sigma_sq).exp()
        })
        .collect();

    let sum: f32 = kernel.iter().sum();
    if sum != 0.0 {
        for k in &mut kernel {
            *k /= sum;
        }
    }
    (kernel, radius)
}

/// Blur `pixmap` in place; samples past the edge repeat the edge pixel
pub(crate) fn apply_gaussian_blur(pixmap: &mut Pixmap, sigma: f32) {
    let (kernel, radius) = gaussian_kernel(sigma);
    if kernel.is_empty() {
        return;
    }

    let width = pixmap.width() as usize;
    let height = pixmap.height() as usize;
    let src: Vec<[f32; 4]> = pixmap
        .pixels()
        .iter()
        .map(|p| {
            [
                p.red() as f32,
                p.green() as f32,
                p.blue() as f32,
                p.alpha() as f32,
            ]
        })
        .collect();

    let pass = |input: &[[f32; 4]], horizontal: bool| -> Vec<[f32; 4]> {
        let mut out = vec![[0.0; 4]; input.len()];
        for y in 0..height {
            for x in 0..width {
                let mut accum = [0.0; 4];
                for (i, weight) in kernel.iter().enumerate() {
                    let offset = i as isize - radius as isize;
                    let idx = if horizontal {
                        let cx = (x as isize + offset).clamp(0, width as isize - 1) as usize;
                        y * width + cx
                    } else {
                        let cy = (y as isize + offset).clamp(0, height as isize - 1) as usize;
                        cy * width + x
                    };
                    for (acc, channel) in accum.iter_mut().zip(input[idx]) {
                        *acc += channel * weight;
                    }
                }
                out[y * width + x] = accum;
            }
        }
        out
    };

    let blurred = pass(&pass(&src, true), false);

    for (px, vals) in pixmap.pixels_mut().iter_mut().zip(blurred) {
        let a = vals[3].round().clamp(0.0, 255.0) as u8;
        // Premultiplied channels may not exceed alpha after rounding
        let channel = |v: f32| (v.round().clamp(0.0, 255.0) as u8).min(a);
        *px = PremultipliedColorU8::from_rgba(channel(vals[0]), channel(vals[1]), channel(vals[2]), a)
            .unwrap_or(PremultipliedColorU8::TRANSPARENT);
    }
}
