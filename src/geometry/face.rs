use crate::Error;

/// One face of an axis aligned box, named by its outward normal.
#[derive(Hash, Debug, Copy, Clone, Eq, PartialEq)]
pub enum Face {
    XPlus,
    XMinus,
    YPlus,
    YMinus,
    ZPlus,
    ZMinus,
}

impl Face {
    /// All faces in output order.
    pub const ALL: [Face; 6] = [
        Face::XPlus,
        Face::XMinus,
        Face::YPlus,
        Face::YMinus,
        Face::ZPlus,
        Face::ZMinus,
    ];

    /// Index of the normal axis, 0 for x through 2 for z.
    pub fn axis(&self) -> usize {
        match self {
            Face::XPlus | Face::XMinus => 0,
            Face::YPlus | Face::YMinus => 1,
            Face::ZPlus | Face::ZMinus => 2,
        }
    }

    pub fn is_plus(&self) -> bool {
        matches!(self, Face::XPlus | Face::YPlus | Face::ZPlus)
    }

    /// Flux sign, so that summing all faces gives the net outward flux.
    pub fn weight(&self) -> f64 {
        if self.is_plus() {
            1.0
        } else {
            -1.0
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Face::XPlus => "X+",
            Face::XMinus => "X-",
            Face::YPlus => "Y+",
            Face::YMinus => "Y-",
            Face::ZPlus => "Z+",
            Face::ZMinus => "Z-",
        }
    }
}

impl std::fmt::Display for Face {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for Face {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Face::ALL
            .into_iter()
            .find(|face| face.label() == s)
            .ok_or_else(|| Error::InvalidFace(s.to_string()))
    }
}
