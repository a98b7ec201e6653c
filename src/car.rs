/// A car being quoted.
///
/// Age is derived once from the manufacturing year and the reference year
/// supplied by the caller. It is not clamped: a model year after the
/// reference year yields a negative age.
#[derive(Debug, Clone, PartialEq)]
pub struct Car {
    brand: String,
    model: String,
    year: i32,
    value: f64,
    age: i32,
}

impl Car {
    /// # Arguments
    ///
    /// * `brand` - Manufacturer name, e.g. "Toyota".
    /// * `model` - Model name, e.g. "Corolla".
    /// * `year` - Manufacturing year.
    /// * `value` - Current market value in dollars.
    /// * `reference_year` - Calendar year the age is measured against.
    pub fn new(
        brand: impl Into<String>,
        model: impl Into<String>,
        year: i32,
        value: f64,
        reference_year: i32,
    ) -> Self {
        Self {
            brand: brand.into(),
            model: model.into(),
            year,
            value,
            age: reference_year - year,
        }
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn age(&self) -> i32 {
        self.age
    }
}
