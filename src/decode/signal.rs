//! RSSI-based signal quality and distance estimation.
//!
//! Coarse buckets only. RSSI is a poor ranging signal, so the distance
//! labels are ballpark figures for open air, not measurements.

/// Signal quality label derived from RSSI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignalQuality {
    /// RSSI in [-30, -1] dBm.
    Excellent,
    /// RSSI in [-50, -31] dBm.
    VeryGood,
    /// RSSI in [-60, -51] dBm.
    Good,
    /// RSSI in [-70, -61] dBm.
    Fair,
    /// RSSI in [-80, -71] dBm.
    Poor,
    /// RSSI in [-90, -81] dBm.
    VeryPoor,
    /// Anything outside the named ranges, positive RSSI included.
    BarelyDetectable,
}

impl SignalQuality {
    /// The quality label as a string.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::VeryGood => "Very Good",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
            Self::VeryPoor => "Very Poor",
            Self::BarelyDetectable => "Barely Detectable",
        }
    }
}

impl std::fmt::Display for SignalQuality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Estimated distance bucket paired with each quality level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DistanceBucket {
    /// Roughly 0-2 m.
    Immediate,
    /// Roughly 2-5 m.
    Near,
    /// Roughly 5-10 m.
    Close,
    /// Roughly 10-15 m.
    Medium,
    /// Roughly 15-25 m.
    Far,
    /// Roughly 25-35 m.
    VeryFar,
    /// 35 m or more.
    Remote,
}

impl DistanceBucket {
    /// The distance range as a string.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Immediate => "0-2m",
            Self::Near => "2-5m",
            Self::Close => "5-10m",
            Self::Medium => "10-15m",
            Self::Far => "15-25m",
            Self::VeryFar => "25-35m",
            Self::Remote => "35m+",
        }
    }
}

impl std::fmt::Display for DistanceBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Quality and distance estimate for one RSSI reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SignalEstimate {
    /// Coarse quality label.
    pub quality: SignalQuality,
    /// Coarse distance bucket.
    pub distance: DistanceBucket,
}

/// Classify an RSSI reading into quality and distance buckets.
///
/// Ranges are inclusive on both ends and non-overlapping; everything
/// outside them falls to the barely-detectable default. Stateless: one
/// reading in, one estimate out.
pub fn estimate(rssi: i32) -> SignalEstimate {
    let (quality, distance) = match rssi {
        -30..=-1 => (SignalQuality::Excellent, DistanceBucket::Immediate),
        -50..=-31 => (SignalQuality::VeryGood, DistanceBucket::Near),
        -60..=-51 => (SignalQuality::Good, DistanceBucket::Close),
        -70..=-61 => (SignalQuality::Fair, DistanceBucket::Medium),
        -80..=-71 => (SignalQuality::Poor, DistanceBucket::Far),
        -90..=-81 => (SignalQuality::VeryPoor, DistanceBucket::VeryFar),
        _ => (SignalQuality::BarelyDetectable, DistanceBucket::Remote),
    };
    SignalEstimate { quality, distance }
}
