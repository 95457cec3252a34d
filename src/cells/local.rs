/// Counter state owned and mutated by exactly one view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LocalCell {
    value: i64,
}

impl LocalCell {
    pub fn new(initial: i64) -> Self {
        Self { value: initial }
    }

    pub fn read(&self) -> i64 {
        self.value
    }

    pub fn increment(&mut self) {
        self.set(self.value.saturating_add(1));
    }

    pub fn decrement(&mut self) {
        self.set(self.value.saturating_sub(1));
    }

    pub fn set(&mut self, value: i64) {
        self.value = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        assert_eq!(LocalCell::default().read(), 0);
    }

    #[test]
    fn increment_and_decrement_move_by_one() {
        let mut cell = LocalCell::default();
        cell.increment();
        assert_eq!(cell.read(), 1);
        cell.decrement();
        cell.decrement();
        assert_eq!(cell.read(), -1);
    }

    #[test]
    fn saturates_at_bounds() {
        let mut cell = LocalCell::new(i64::MAX);
        cell.increment();
        assert_eq!(cell.read(), i64::MAX);
    }
}
