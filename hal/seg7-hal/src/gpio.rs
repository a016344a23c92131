//! GPIO pin abstractions
//!
//! The display shield latches each SPI word on the rising edge of its
//! chip-select line, so the only GPIO the engine needs is one output.

/// Digital output pin
///
/// Implementations drive the actual pin register for the specific chip.
/// Writes are assumed infallible; on every supported chip a GPIO write
/// cannot fail once the pin has been configured as an output.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Check if the pin is currently set high
    fn is_set_high(&self) -> bool;

    /// Set the pin to a specific level
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }
}

/// Active-low chip-select helpers
///
/// A frame is one `select()` / transfer / `deselect()` cycle.
pub trait ChipSelect: OutputPin {
    /// Assert chip select (drive low) to open a frame
    fn select(&mut self) {
        self.set_low();
    }

    /// Release chip select (drive high) to latch the frame
    fn deselect(&mut self) {
        self.set_high();
    }

    /// Check if a frame is currently open
    fn is_selected(&self) -> bool {
        !self.is_set_high()
    }
}

// Blanket implementation for every output pin
impl<T: OutputPin + ?Sized> ChipSelect for T {}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockPin {
        high: bool,
        edges: u8,
    }

    impl OutputPin for MockPin {
        fn set_high(&mut self) {
            if !self.high {
                self.edges += 1;
            }
            self.high = true;
        }

        fn set_low(&mut self) {
            if self.high {
                self.edges += 1;
            }
            self.high = false;
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    #[test]
    fn test_select_is_active_low() {
        let mut pin = MockPin { high: true, edges: 0 };

        pin.select();
        assert!(pin.is_selected());
        assert!(!pin.is_set_high());

        pin.deselect();
        assert!(!pin.is_selected());
        assert_eq!(pin.edges, 2);
    }

    #[test]
    fn test_set_state() {
        let mut pin = MockPin { high: false, edges: 0 };
        pin.set_state(true);
        assert!(pin.is_set_high());
        pin.set_state(false);
        assert!(!pin.is_set_high());
    }
}
