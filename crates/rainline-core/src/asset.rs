//! # Asset Classification
//!
//! Catalog identifiers carry meaning in their structure: `GUT-SC-MAR-3M` is
//! a Storm Cloud gutter in 3 metre stock, `DP-65-3M` is a 65 mm downpipe,
//! `ACL-80` is an adjustable clip. This module parses that structure ONCE
//! into a closed set of tagged variants so the expansion rules can be
//! exhaustive pattern matches instead of ordered string checks.
//!
//! Matching is case-insensitive and whitespace-tolerant; the raw identifier
//! is preserved elsewhere for catalog lookup and display.

// =============================================================================
// Profile
// =============================================================================

/// Gutter product family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Storm Cloud (SC) profile.
    StormCloud,
    /// Classic (CL) profile.
    Classic,
}

impl Profile {
    /// Parses a profile code token ("SC" or "CL").
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "SC" => Some(Profile::StormCloud),
            "CL" => Some(Profile::Classic),
            _ => None,
        }
    }

    /// Returns the profile code as it appears in identifiers.
    pub const fn code(&self) -> &'static str {
        match self {
            Profile::StormCloud => "SC",
            Profile::Classic => "CL",
        }
    }

    /// Returns the bracket identifier for this profile.
    ///
    /// Brackets are profile-specific: a Storm Cloud gutter hangs on
    /// `BRK-SC-MAR`, a Classic gutter on `BRK-CL-MAR`.
    pub fn bracket_asset_id(&self) -> String {
        format!("BRK-{}-MAR", self.code())
    }
}

// =============================================================================
// Clip Size
// =============================================================================

/// Downpipe/clip diameter, 65 mm or 80 mm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipSize {
    Size65,
    Size80,
}

impl ClipSize {
    /// Detects the size token inside an (uppercased) identifier.
    ///
    /// Mirrors the catalog convention: the size appears as a substring
    /// ("DP-65-3M", "DPJ-80", "SCL-65"). Returns None when neither token
    /// is present.
    pub fn detect(upper_id: &str) -> Option<Self> {
        if upper_id.contains("65") {
            Some(ClipSize::Size65)
        } else if upper_id.contains("80") {
            Some(ClipSize::Size80)
        } else {
            None
        }
    }

    /// Returns the size token as it appears in identifiers.
    pub const fn token(&self) -> &'static str {
        match self {
            ClipSize::Size65 => "65",
            ClipSize::Size80 => "80",
        }
    }
}

/// Fallback size when an identifier carries no size token.
/// 65 mm is by far the more common residential diameter.
pub const DEFAULT_CLIP_SIZE: ClipSize = ClipSize::Size65;

// =============================================================================
// AssetRef
// =============================================================================

/// A classified catalog identifier.
///
/// Exactly one variant matches any identifier; the categories are mutually
/// exclusive, so expansion rules never depend on a check order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AssetRef {
    /// Gutter stock: `GUT-{SC|CL}-MAR-{length}M`.
    Gutter {
        profile: Profile,
        /// Manufactured stock length in metres (1.5, 3 or 5).
        stock_length_m: f64,
    },
    /// Downpipe or downpipe joiner: `DP-*` or `DPJ-*`.
    Downpipe { size: ClipSize },
    /// Dropper outlet: `DROPPER` or `DRP-*`.
    Dropper,
    /// Saddle clip: `SCL-*`.
    SaddleClip { size: ClipSize },
    /// Adjustable clip: `ACL-*`.
    AdjustableClip { size: ClipSize },
    /// Anything else passes through expansion untouched.
    Other,
}

impl AssetRef {
    /// Classifies a raw catalog identifier.
    ///
    /// ## Example
    /// ```rust
    /// use rainline_core::asset::{AssetRef, ClipSize, Profile};
    ///
    /// let gutter = AssetRef::classify("GUT-SC-MAR-3M");
    /// assert_eq!(
    ///     gutter,
    ///     AssetRef::Gutter { profile: Profile::StormCloud, stock_length_m: 3.0 }
    /// );
    ///
    /// let downpipe = AssetRef::classify("dpj-80");
    /// assert_eq!(downpipe, AssetRef::Downpipe { size: ClipSize::Size80 });
    /// ```
    pub fn classify(asset_id: &str) -> AssetRef {
        let id = asset_id.trim().to_ascii_uppercase();

        if let Some(gutter) = parse_gutter(&id) {
            return gutter;
        }
        if id.starts_with("DP-") || id.starts_with("DPJ-") {
            return AssetRef::Downpipe {
                size: ClipSize::detect(&id).unwrap_or(DEFAULT_CLIP_SIZE),
            };
        }
        if id == "DROPPER" || id.starts_with("DRP-") {
            return AssetRef::Dropper;
        }
        if id.starts_with("SCL-") {
            return AssetRef::SaddleClip {
                size: ClipSize::detect(&id).unwrap_or(DEFAULT_CLIP_SIZE),
            };
        }
        if id.starts_with("ACL-") {
            return AssetRef::AdjustableClip {
                size: ClipSize::detect(&id).unwrap_or(DEFAULT_CLIP_SIZE),
            };
        }
        AssetRef::Other
    }

    /// True for adjustable clips. Used for the batch-wide clip family scan.
    pub fn is_adjustable_clip(&self) -> bool {
        matches!(self, AssetRef::AdjustableClip { .. })
    }
}

/// Parses `GUT-{SC|CL}-MAR-{length}M`, or None if the identifier is not a
/// gutter. A malformed gutter-ish identifier (unknown profile, bad length)
/// is not a gutter; it falls through to the other categories.
fn parse_gutter(upper_id: &str) -> Option<AssetRef> {
    let rest = upper_id.strip_prefix("GUT-")?;
    let mut parts = rest.split('-');

    let profile = Profile::from_code(parts.next()?)?;
    if parts.next()? != "MAR" {
        return None;
    }
    let length_token = parts.next()?.strip_suffix('M')?;
    if parts.next().is_some() {
        return None;
    }

    let stock_length_m: f64 = length_token.parse().ok()?;
    if !stock_length_m.is_finite() || stock_length_m < 0.0 {
        return None;
    }

    Some(AssetRef::Gutter {
        profile,
        stock_length_m,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
