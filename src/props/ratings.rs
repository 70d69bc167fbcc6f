use std::fmt::{Display, Formatter};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EraRating {
    Excellent,
    Good,
    Average,
    Poor,
}

impl EraRating {
    pub fn new(era: f64) -> Self {
        if era < 2.50 {
            Self::Excellent
        } else if era < 3.50 {
            Self::Good
        } else if era < 4.50 {
            Self::Average
        } else {
            Self::Poor
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum WhipRating {
    Excellent,
    Good,
    Average,
    Poor,
}

impl WhipRating {
    pub fn new(whip: f64) -> Self {
        if whip < 1.00 {
            Self::Excellent
        } else if whip < 1.20 {
            Self::Good
        } else if whip < 1.35 {
            Self::Average
        } else {
            Self::Poor
        }
    }
}

/// Strikeouts per nine innings.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StrikeoutRating {
    Elite,
    Good,
    Average,
    Low,
}

impl StrikeoutRating {
    pub fn new(k_per_9: f64) -> Self {
        if k_per_9 >= 10.0 {
            Self::Elite
        } else if k_per_9 >= 8.0 {
            Self::Good
        } else if k_per_9 >= 6.0 {
            Self::Average
        } else {
            Self::Low
        }
    }
}

/// Walks per nine innings.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ControlRating {
    Excellent,
    AboveAverage,
    Average,
    Wild,
}

impl ControlRating {
    pub fn new(bb_per_9: f64) -> Self {
        if bb_per_9 < 2.0 {
            Self::Excellent
        } else if bb_per_9 < 3.0 {
            Self::AboveAverage
        } else if bb_per_9 < 4.0 {
            Self::Average
        } else {
            Self::Wild
        }
    }
}

impl Display for EraRating {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Average => "Average",
            Self::Poor => "Poor",
        })
    }
}

impl Display for WhipRating {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Average => "Average",
            Self::Poor => "Poor",
        })
    }
}

impl Display for StrikeoutRating {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", match self {
            Self::Elite => "Elite Strikeout Pitcher",
            Self::Good => "Good Strikeout Pitcher",
            Self::Average => "Average Strikeout Rate",
            Self::Low => "Low Strikeout Rate",
        })
    }
}

impl Display for ControlRating {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", match self {
            Self::Excellent => "Excellent Control",
            Self::AboveAverage => "Above Average Control",
            Self::Average => "Average Control",
            Self::Wild => "Wild / Poor Control",
        })
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Ratings {
    pub era: EraRating,
    pub whip: WhipRating,
    pub k_per_9: StrikeoutRating,
    pub bb_per_9: ControlRating,
}

impl Ratings {
    pub fn new(era: f64, whip: f64, k_per_9: f64, bb_per_9: f64) -> Self {
        Self {
            era: EraRating::new(era),
            whip: WhipRating::new(whip),
            k_per_9: StrikeoutRating::new(k_per_9),
            bb_per_9: ControlRating::new(bb_per_9),
        }
    }
}
