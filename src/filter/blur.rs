use crate::foundation::buffer::GrayImage;
use crate::foundation::error::{SketchError, SketchResult};

const Q16_ONE: u32 = 1 << 16;

/// Sigma derived from an odd kernel size: `0.3 * ((ksize - 1) * 0.5 - 1) + 0.8`.
///
/// `ksize = 21` gives `3.5`.
pub fn sigma_for_kernel_size(ksize: u32) -> f64 {
    0.3 * ((f64::from(ksize) - 1.0) * 0.5 - 1.0) + 0.8
}

/// Separable Gaussian kernel with Q16 fixed-point taps that sum to exactly `1 << 16`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GaussianKernel {
    taps: Vec<u32>,
}

impl GaussianKernel {
    /// Kernel of odd extent `ksize`, sigma derived via [`sigma_for_kernel_size`].
    pub fn from_size(ksize: u32) -> SketchResult<Self> {
        Self::new(ksize, sigma_for_kernel_size(ksize))
    }

    /// Kernel of odd extent `ksize` with an explicit `sigma`.
    pub fn new(ksize: u32, sigma: f64) -> SketchResult<Self> {
        if ksize == 0 || ksize.is_multiple_of(2) {
            return Err(SketchError::validation(format!(
                "gaussian kernel size must be odd and > 0, got {ksize}"
            )));
        }
        if !sigma.is_finite() || sigma <= 0.0 {
            return Err(SketchError::validation("gaussian sigma must be > 0"));
        }

        let r = (ksize / 2) as i32;
        let denom = 2.0 * sigma * sigma;
        let weights_f: Vec<f64> = (-r..=r)
            .map(|i| {
                let x = f64::from(i);
                (-x * x / denom).exp()
            })
            .collect();
        let sum: f64 = weights_f.iter().sum();
        if sum <= 0.0 {
            return Err(SketchError::validation("gaussian kernel sum is zero"));
        }

        let mut taps = Vec::<u32>::with_capacity(weights_f.len());
        let mut acc: i64 = 0;
        for &wf in &weights_f {
            let q = ((wf / sum) * f64::from(Q16_ONE)).round() as i64;
            let q = q.clamp(0, i64::from(Q16_ONE));
            taps.push(q as u32);
            acc += q;
        }
        // Push the rounding residue into the centre tap so flat regions stay flat.
        let delta = i64::from(Q16_ONE) - acc;
        if delta != 0 {
            let mid = taps.len() / 2;
            let new_mid = (i64::from(taps[mid]) + delta).clamp(0, i64::from(Q16_ONE));
            taps[mid] = new_mid as u32;
        }

        Ok(Self { taps })
    }

    /// Q16 taps, left to right.
    pub fn taps(&self) -> &[u32] {
        &self.taps
    }

    /// Half extent of the kernel.
    pub fn radius(&self) -> usize {
        self.taps.len() / 2
    }
}

/// Reflect-101 border addressing (`dcb|abcd|cba`) of index `i` into `0..n`.
pub fn reflect_101(i: i64, n: usize) -> usize {
    if n <= 1 {
        return 0;
    }
    let period = 2 * (n as i64 - 1);
    let m = i.rem_euclid(period);
    if m < n as i64 {
        m as usize
    } else {
        (period - m) as usize
    }
}

/// Blur `src` with `kernel` horizontally then vertically.
pub fn gaussian_blur(src: &GrayImage, kernel: &GaussianKernel) -> GrayImage {
    let (width, height) = src.dimensions();
    let (w, h) = (width as usize, height as usize);
    let mut tmp = vec![0u8; w * h];
    let mut out = vec![0u8; w * h];

    horizontal_pass(src.as_raw(), &mut tmp, w, h, kernel);
    vertical_pass(&tmp, &mut out, w, h, kernel);
    src.with_same_shape(out)
}

fn horizontal_pass(src: &[u8], dst: &mut [u8], w: usize, h: usize, kernel: &GaussianKernel) {
    let radius = kernel.radius() as i64;
    for y in 0..h {
        let row = &src[y * w..(y + 1) * w];
        for x in 0..w {
            let mut acc = 0u64;
            for (ki, &kw) in kernel.taps().iter().enumerate() {
                let sx = reflect_101(x as i64 + ki as i64 - radius, w);
                acc += u64::from(kw) * u64::from(row[sx]);
            }
            dst[y * w + x] = q16_to_u8(acc);
        }
    }
}

fn vertical_pass(src: &[u8], dst: &mut [u8], w: usize, h: usize, kernel: &GaussianKernel) {
    let radius = kernel.radius() as i64;
    for y in 0..h {
        for x in 0..w {
            let mut acc = 0u64;
            for (ki, &kw) in kernel.taps().iter().enumerate() {
                let sy = reflect_101(y as i64 + ki as i64 - radius, h);
                acc += u64::from(kw) * u64::from(src[sy * w + x]);
            }
            dst[y * w + x] = q16_to_u8(acc);
        }
    }
}

fn q16_to_u8(acc: u64) -> u8 {
    let v = (acc + u64::from(Q16_ONE / 2)) >> 16;
    v.min(255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/filter/blur.rs"]
mod tests;
