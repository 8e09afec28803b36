/// A two dimensional plane of samples, stored row-major.
///
/// Used for a single color channel of an image as well as for the subbands
/// produced by the wavelet transform.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    width: usize,
    height: usize,
    data: Vec<f64>,
}

impl Plane {
    /// A plane filled with zeros
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0.0; width * height],
        }
    }

    /// Builds a plane by calling `f(row, col)` for every sample
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> f64) -> Self {
        let mut data = Vec::with_capacity(width * height);
        for row in 0..height {
            for col in 0..width {
                data.push(f(row, col));
            }
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Wraps row-major samples, `None` if the sample count does not match the dimensions
    pub fn from_vec(width: usize, height: usize, data: Vec<f64>) -> Option<Self> {
        (data.len() == width * height).then_some(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.width + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.data[row * self.width + col] = value;
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Whether both dimensions are even, so the wavelet transform covers every sample
    pub fn has_even_dimensions(&self) -> bool {
        self.width % 2 == 0 && self.height % 2 == 0
    }

    /// Crops the last row and/or column away if the dimension is odd
    pub fn cropped_to_even(&self) -> Plane {
        let width = self.width & !1;
        let height = self.height & !1;
        if width == self.width && height == self.height {
            return self.clone();
        }

        Plane::from_fn(width, height, |row, col| self.get(row, col))
    }
}
