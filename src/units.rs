pub trait Unit<T> {
    fn confine(value: T) -> Self;
    fn release(self) -> T;
}

#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Degrees(f64);

impl Degrees {
    pub fn radians(self) -> Radians {
        Radians(self.0.to_radians())
    }
}

impl Unit<f64> for Degrees {
    fn confine(value: f64) -> Self {
        Self(value)
    }

    fn release(self) -> f64 {
        self.0
    }
}

#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Radians(f64);

impl Radians {
    pub fn degrees(self) -> Degrees {
        Degrees(self.0.to_degrees())
    }
}

impl Unit<f64> for Radians {
    fn confine(value: f64) -> Self {
        Self(value)
    }

    fn release(self) -> f64 {
        self.0
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use float_eq::assert_float_eq;
    const EPSILON: f64 = 0.0000_01;

    #[test]
    fn degree_radian_roundtrip() {
        assert_float_eq!(
            Degrees::confine(180.0).radians().release(),
            std::f64::consts::PI,
            abs <= EPSILON
        );
        assert_float_eq!(
            Radians::confine(std::f64::consts::FRAC_PI_2)
                .degrees()
                .release(),
            90.0,
            abs <= EPSILON
        );
    }
}
