/* # numeric helpers */

/// evenly spaced samples over a closed interval
pub fn linspace(start: f64, stop: f64, samples: usize) -> Vec<f64> {
    match samples {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (samples - 1) as f64;
            (0..samples).map(|j| start + step * j as f64).collect()
        }
    }
}
