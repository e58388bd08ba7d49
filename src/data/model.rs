// ---------------------------------------------------------------------------
// AngleMatrix – the loaded joint rotation trace
// ---------------------------------------------------------------------------

/// Number of arm joints recorded per time step.
pub const ARM_COUNT: usize = 3;

/// Legend labels, one per column of the input file, in column order.
pub const ARM_LABELS: [&str; ARM_COUNT] = ["1st arm", "2nd arm", "3rd arm"];

/// All recorded joint rotations, indexed `[time step][arm]`.
///
/// Angles are radians. The x axis of the plot is implicit: the row index is
/// the time step.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AngleMatrix {
    rows: Vec<[f64; ARM_COUNT]>,
}

impl AngleMatrix {
    pub fn from_rows(rows: Vec<[f64; ARM_COUNT]>) -> Self {
        AngleMatrix { rows }
    }

    /// Number of time steps.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Extract one column as its own series, preserving row order.
    ///
    /// # Panics
    /// Panics if `arm >= ARM_COUNT`.
    pub fn series(&self, arm: usize) -> Vec<f64> {
        assert!(arm < ARM_COUNT, "arm index {arm} out of range");
        self.rows.iter().map(|row| row[arm]).collect()
    }
}
