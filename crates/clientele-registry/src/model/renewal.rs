//! Renewal window filter

/// Filter token selecting which renewals to list.
///
/// Window filters match policies ending within `[today, today + N days]`
/// inclusive. `Expired` matches clients explicitly marked expired as well
/// as any policy whose end date has passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenewalFilter {
    #[default]
    All,
    Expired,
    Within30,
    Within60,
    Within90,
}

impl RenewalFilter {
    pub fn as_str(self) -> &'static str {
        match self {
            RenewalFilter::All => "all",
            RenewalFilter::Expired => "expired",
            RenewalFilter::Within30 => "30",
            RenewalFilter::Within60 => "60",
            RenewalFilter::Within90 => "90",
        }
    }

    /// Window length in days, for the bounded filters
    pub fn window_days(self) -> Option<i64> {
        match self {
            RenewalFilter::Within30 => Some(30),
            RenewalFilter::Within60 => Some(60),
            RenewalFilter::Within90 => Some(90),
            RenewalFilter::All | RenewalFilter::Expired => None,
        }
    }
}

impl std::fmt::Display for RenewalFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for RenewalFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(RenewalFilter::All),
            "expired" => Ok(RenewalFilter::Expired),
            "30" => Ok(RenewalFilter::Within30),
            "60" => Ok(RenewalFilter::Within60),
            "90" => Ok(RenewalFilter::Within90),
            _ => Err(format!("Invalid renewal filter: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renewal_filter_tokens() {
        assert_eq!("all".parse::<RenewalFilter>().unwrap(), RenewalFilter::All);
        assert_eq!(
            "expired".parse::<RenewalFilter>().unwrap(),
            RenewalFilter::Expired
        );
        assert_eq!(
            "30".parse::<RenewalFilter>().unwrap(),
            RenewalFilter::Within30
        );
        assert_eq!(
            "60".parse::<RenewalFilter>().unwrap(),
            RenewalFilter::Within60
        );
        assert_eq!(
            "90".parse::<RenewalFilter>().unwrap(),
            RenewalFilter::Within90
        );
    }

    #[test]
    fn test_renewal_filter_unknown_token() {
        assert!("45".parse::<RenewalFilter>().is_err());
        // Callers fall back to the default on bad tokens
        assert_eq!(RenewalFilter::default(), RenewalFilter::All);
    }

    #[test]
    fn test_renewal_filter_roundtrip() {
        for filter in [
            RenewalFilter::All,
            RenewalFilter::Expired,
            RenewalFilter::Within30,
            RenewalFilter::Within60,
            RenewalFilter::Within90,
        ] {
            assert_eq!(filter.as_str().parse::<RenewalFilter>().unwrap(), filter);
        }
    }

    #[test]
    fn test_window_days() {
        assert_eq!(RenewalFilter::Within30.window_days(), Some(30));
        assert_eq!(RenewalFilter::Within90.window_days(), Some(90));
        assert_eq!(RenewalFilter::All.window_days(), None);
        assert_eq!(RenewalFilter::Expired.window_days(), None);
    }
}
