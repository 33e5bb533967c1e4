//! Travel-mode descriptor.

use std::fmt;

/// The mutually tracked travel-mode conditions of a path state.
///
/// States whose descriptors differ are in different mode regimes and are
/// never compared on their numeric objectives.
///
/// # Examples
///
/// ```
/// use pareto_spt::domain::ModeFlags;
///
/// let walking = ModeFlags::WALK;
/// let renting = ModeFlags::WALK.with_bike_renting(true);
///
/// assert!(renting.is_bike_renting());
/// assert_ne!(walking, renting);
/// assert_eq!(renting.to_string(), "bike-renting");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ModeFlags(u8);

impl ModeFlags {
    /// No mode condition set: travelling on foot or by transit.
    pub const WALK: Self = Self(0);
    /// A rented bicycle is in use.
    pub const BIKE_RENTING: Self = Self(1);
    /// A car has been parked.
    pub const CAR_PARKED: Self = Self(1 << 1);
    /// A private bicycle has been parked.
    pub const BIKE_PARKED: Self = Self(1 << 2);

    /// Build a descriptor from the three individual conditions.
    pub const fn new(bike_renting: bool, car_parked: bool, bike_parked: bool) -> Self {
        Self::WALK
            .with_bike_renting(bike_renting)
            .with_car_parked(car_parked)
            .with_bike_parked(bike_parked)
    }

    const fn with(self, flag: Self, on: bool) -> Self {
        if on {
            Self(self.0 | flag.0)
        } else {
            Self(self.0 & !flag.0)
        }
    }

    /// Set or clear the bike-renting condition.
    pub const fn with_bike_renting(self, on: bool) -> Self {
        self.with(Self::BIKE_RENTING, on)
    }

    /// Set or clear the car-parked condition.
    pub const fn with_car_parked(self, on: bool) -> Self {
        self.with(Self::CAR_PARKED, on)
    }

    /// Set or clear the bike-parked condition.
    pub const fn with_bike_parked(self, on: bool) -> Self {
        self.with(Self::BIKE_PARKED, on)
    }

    /// True if a rented bicycle is in use.
    pub const fn is_bike_renting(self) -> bool {
        self.0 & Self::BIKE_RENTING.0 != 0
    }

    /// True if a car has been parked.
    pub const fn is_car_parked(self) -> bool {
        self.0 & Self::CAR_PARKED.0 != 0
    }

    /// True if a private bicycle has been parked.
    pub const fn is_bike_parked(self) -> bool {
        self.0 & Self::BIKE_PARKED.0 != 0
    }
}

impl fmt::Debug for ModeFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ModeFlags({self})")
    }
}

impl fmt::Display for ModeFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = [
            (self.is_bike_renting(), "bike-renting"),
            (self.is_car_parked(), "car-parked"),
            (self.is_bike_parked(), "bike-parked"),
        ]
        .into_iter()
        .filter_map(|(on, name)| on.then_some(name))
        .collect();

        if names.is_empty() {
            f.write_str("walk")
        } else {
            f.write_str(&names.join("+"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_walk() {
        assert_eq!(ModeFlags::default(), ModeFlags::WALK);
        assert!(!ModeFlags::WALK.is_bike_renting());
        assert!(!ModeFlags::WALK.is_car_parked());
        assert!(!ModeFlags::WALK.is_bike_parked());
    }

    #[test]
    fn flags_are_independent() {
        let mode = ModeFlags::new(true, false, true);
        assert!(mode.is_bike_renting());
        assert!(!mode.is_car_parked());
        assert!(mode.is_bike_parked());

        let cleared = mode.with_bike_renting(false);
        assert!(!cleared.is_bike_renting());
        assert!(cleared.is_bike_parked());
    }

    #[test]
    fn any_single_difference_breaks_equality() {
        let base = ModeFlags::WALK;
        assert_ne!(base, base.with_bike_renting(true));
        assert_ne!(base, base.with_car_parked(true));
        assert_ne!(base, base.with_bike_parked(true));
    }

    #[test]
    fn display() {
        assert_eq!(ModeFlags::WALK.to_string(), "walk");
        assert_eq!(
            ModeFlags::new(true, true, false).to_string(),
            "bike-renting+car-parked"
        );
        assert_eq!(ModeFlags::CAR_PARKED.to_string(), "car-parked");
    }
}
