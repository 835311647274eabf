//! Push-button abstraction
//!
//! The encoder button is sampled, never interrupt driven: the gesture
//! recognizer reads it once per debounce tick.

/// Digital input wired to the encoder push button
pub trait ButtonPin {
    /// Check if the button is currently held down
    fn is_pressed(&mut self) -> bool;
}

impl<T: ButtonPin + ?Sized> ButtonPin for &mut T {
    fn is_pressed(&mut self) -> bool {
        (**self).is_pressed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Held(bool);

    impl ButtonPin for Held {
        fn is_pressed(&mut self) -> bool {
            self.0
        }
    }

    fn sample(mut pin: impl ButtonPin) -> bool {
        pin.is_pressed()
    }

    #[test]
    fn test_mutable_reference_forwards() {
        let mut held = Held(true);
        assert!(sample(&mut held));
        held.0 = false;
        assert!(!sample(&mut held));
    }
}
