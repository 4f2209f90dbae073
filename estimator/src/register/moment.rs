use na::Vector2;

/// Fixed-size history ring of normalized velocity moments for one particle.
///
/// Slot `j` keeps `V / n_i` and `V * V / n_i` (componentwise) of one
/// recorded sample. The `r`-th recorded sample goes to slot `r % ring_size`,
/// so the ring always holds the latest `ring_size` samples and memory stays
/// bounded for arbitrarily long traces.
pub struct MomentRegister {
    first: Vec<Vector2<f64>>,
    second: Vec<Vector2<f64>>,
    records: usize,
}

impl MomentRegister {
    /// Create an empty register with `ring_size` history slots.
    /// `ring_size` must be positive, the estimator validates it.
    pub fn new(ring_size: usize) -> Self {
        Self {
            first: vec![Vector2::zeros(); ring_size],
            second: vec![Vector2::zeros(); ring_size],
            records: 0,
        }
    }

    pub fn ring_size(&self) -> usize {
        self.first.len()
    }

    /// Number of slots that already hold a sample.
    pub fn filled(&self) -> usize {
        self.records.min(self.ring_size())
    }

    /// Ring slot the next recorded sample goes to.
    pub fn next_slot(&self) -> usize {
        self.records % self.ring_size()
    }

    /// Store normalized moments of one sample into the next slot.
    pub fn record(&mut self, velocity: Vector2<f64>, normalization: f64) {
        let slot = self.next_slot();
        self.first[slot] = velocity / normalization;
        self.second[slot] = velocity.component_mul(&velocity) / normalization;
        self.records += 1;
    }

    /// Mean of stored first moments over the filled slots.
    pub fn first_moment(&self) -> Vector2<f64> {
        let filled = self.filled();
        if filled == 0 {
            return Vector2::zeros();
        }
        let sum = self.first[..filled]
            .iter()
            .fold(Vector2::zeros(), |acc, v| acc + v);
        sum / filled as f64
    }

    /// Mean of stored second moments over the filled slots.
    pub fn second_moment(&self) -> Vector2<f64> {
        let filled = self.filled();
        if filled == 0 {
            return Vector2::zeros();
        }
        let sum = self.second[..filled]
            .iter()
            .fold(Vector2::zeros(), |acc, v| acc + v);
        sum / filled as f64
    }

    /// Componentwise variance of the windowed velocity,
    /// `mean(V^2) - mean(V)^2` over the filled slots.
    pub fn velocity_variance(&self) -> Vector2<f64> {
        let m1 = self.first_moment();
        let m2 = self.second_moment();
        // roundoff can push an exact zero slightly negative
        Vector2::new(
            (m2.x - m1.x * m1.x).max(0.0),
            (m2.y - m1.y * m1.y).max(0.0),
        )
    }
}
