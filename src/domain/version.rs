use crate::domain::prerelease::{PreRelease, PreReleaseType};
use crate::error::{ReleaseError, Result};
use regex::Regex;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// PEP 440 version grammar, accepting the permitted alternate spellings
const VERSION_PATTERN: &str = r"(?ix)^\s*
    v?
    (?:(?P<epoch>[0-9]+)!)?
    (?P<release>[0-9]+(?:\.[0-9]+)*)
    (?P<pre>[-_.]?(?P<pre_l>alpha|a|beta|b|preview|pre|c|rc)[-_.]?(?P<pre_n>[0-9]+)?)?
    (?P<post>(?:-(?P<post_n1>[0-9]+))|(?:[-_.]?(?P<post_l>post|rev|r)[-_.]?(?P<post_n2>[0-9]+)?))?
    (?P<dev>[-_.]?dev[-_.]?(?P<dev_n>[0-9]+)?)?
    (?:\+(?P<local>[a-z0-9]+(?:[-_.][a-z0-9]+)*))?
    \s*$";

fn version_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(VERSION_PATTERN).expect("version pattern is valid"))
}

/// One dot-separated segment of a local version label
///
/// Numeric segments sort after alphanumeric ones.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum LocalSegment {
    Alpha(String),
    Numeric(u64),
}

impl fmt::Display for LocalSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocalSegment::Alpha(s) => write!(f, "{}", s),
            LocalSegment::Numeric(n) => write!(f, "{}", n),
        }
    }
}

/// PEP 440 version: `[N!]N(.N)*[{a|b|rc}N][.postN][.devN][+local]`
///
/// Equality and ordering follow PEP 440, so `1.0` equals `1.0.0` and
/// `1.0.dev0 < 1.0a1 < 1.0 < 1.0.post1`.
#[derive(Debug, Clone)]
pub struct Version {
    pub epoch: u64,
    pub release: Vec<u64>,
    pub pre: Option<PreRelease>,
    pub post: Option<u64>,
    pub dev: Option<u64>,
    pub local: Option<Vec<LocalSegment>>,
}

#[derive(PartialEq, Eq, PartialOrd, Ord)]
enum PreKey {
    Floor,
    Phase(PreRelease),
    Ceiling,
}

#[derive(PartialEq, Eq, PartialOrd, Ord)]
enum DevKey {
    Number(u64),
    Ceiling,
}

impl Version {
    /// Create a plain `major.minor.patch` release
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            epoch: 0,
            release: vec![major, minor, patch],
            pre: None,
            post: None,
            dev: None,
            local: None,
        }
    }

    /// The `0.0.0` floor used when no ancestor carries a version tag
    pub fn zero() -> Self {
        Version::new(0, 0, 0)
    }

    /// Parse a PEP 440 version string
    pub fn parse(input: &str) -> Result<Self> {
        let captures = version_regex().captures(input).ok_or_else(|| {
            ReleaseError::version(format!("Invalid PEP 440 version: '{}'", input))
        })?;

        let epoch = match captures.name("epoch") {
            Some(m) => parse_number(m.as_str())?,
            None => 0,
        };

        let release = captures["release"]
            .split('.')
            .map(parse_number)
            .collect::<Result<Vec<_>>>()?;

        let pre = match captures.name("pre_l") {
            Some(label) => {
                let identifier = PreReleaseType::parse(label.as_str())?;
                let iteration = match captures.name("pre_n") {
                    Some(n) => parse_number(n.as_str())?,
                    None => 0,
                };
                Some(PreRelease::new(identifier, iteration))
            }
            None => None,
        };

        let post = if captures.name("post").is_some() {
            match captures.name("post_n1").or_else(|| captures.name("post_n2")) {
                Some(n) => Some(parse_number(n.as_str())?),
                None => Some(0),
            }
        } else {
            None
        };

        let dev = if captures.name("dev").is_some() {
            match captures.name("dev_n") {
                Some(n) => Some(parse_number(n.as_str())?),
                None => Some(0),
            }
        } else {
            None
        };

        let local = captures.name("local").map(|m| parse_local(m.as_str()));

        Ok(Version {
            epoch,
            release,
            pre,
            post,
            dev,
            local,
        })
    }

    /// Whether this is a pre-release or development release
    pub fn is_prerelease(&self) -> bool {
        self.pre.is_some() || self.dev.is_some()
    }

    fn trimmed_release(&self) -> &[u64] {
        let end = self
            .release
            .iter()
            .rposition(|&n| n != 0)
            .map_or(0, |i| i + 1);
        &self.release[..end]
    }

    fn pre_key(&self) -> PreKey {
        match (self.pre, self.post, self.dev) {
            (None, None, Some(_)) => PreKey::Floor,
            (None, _, _) => PreKey::Ceiling,
            (Some(pre), _, _) => PreKey::Phase(pre),
        }
    }

    fn dev_key(&self) -> DevKey {
        match self.dev {
            Some(n) => DevKey::Number(n),
            None => DevKey::Ceiling,
        }
    }
}

fn parse_number(s: &str) -> Result<u64> {
    s.parse::<u64>()
        .map_err(|_| ReleaseError::version(format!("Version component out of range: {}", s)))
}

fn parse_local(s: &str) -> Vec<LocalSegment> {
    s.split(['-', '_', '.'])
        .map(|part| match part.parse::<u64>() {
            Ok(n) => LocalSegment::Numeric(n),
            Err(_) => LocalSegment::Alpha(part.to_lowercase()),
        })
        .collect()
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.epoch
            .cmp(&other.epoch)
            .then_with(|| self.trimmed_release().cmp(other.trimmed_release()))
            .then_with(|| self.pre_key().cmp(&other.pre_key()))
            .then_with(|| self.post.cmp(&other.post))
            .then_with(|| self.dev_key().cmp(&other.dev_key()))
            .then_with(|| self.local.cmp(&other.local))
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl FromStr for Version {
    type Err = ReleaseError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.epoch != 0 {
            write!(f, "{}!", self.epoch)?;
        }
        let release: Vec<String> = self.release.iter().map(|n| n.to_string()).collect();
        write!(f, "{}", release.join("."))?;
        if let Some(pre) = self.pre {
            write!(f, "{}", pre)?;
        }
        if let Some(post) = self.post {
            write!(f, ".post{}", post)?;
        }
        if let Some(dev) = self.dev {
            write!(f, ".dev{}", dev)?;
        }
        if let Some(local) = &self.local {
            let segments: Vec<String> = local.iter().map(|s| s.to_string()).collect();
            write!(f, "+{}", segments.join("."))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> Version {
        Version::parse(s).unwrap()
    }

    #[test]
    fn test_version_parse() {
        let version = v("1.2.3");
        assert_eq!(version.release, vec![1, 2, 3]);
        assert_eq!(version.epoch, 0);
        assert!(version.pre.is_none());
    }

    #[test]
    fn test_version_parse_full() {
        let version = v("2!1.0rc2.post3.dev4+ubuntu.1");
        assert_eq!(version.epoch, 2);
        assert_eq!(version.release, vec![1, 0]);
        assert_eq!(
            version.pre,
            Some(PreRelease::new(PreReleaseType::ReleaseCandidate, 2))
        );
        assert_eq!(version.post, Some(3));
        assert_eq!(version.dev, Some(4));
        assert_eq!(
            version.local,
            Some(vec![
                LocalSegment::Alpha("ubuntu".to_string()),
                LocalSegment::Numeric(1)
            ])
        );
    }

    #[test]
    fn test_version_parse_invalid() {
        assert!(Version::parse("").is_err());
        assert!(Version::parse("release-1.2.3").is_err());
        assert!(Version::parse("1.2.x").is_err());
        assert!(Version::parse("vv1.2.3").is_err());
        assert!(Version::parse("1..2").is_err());
    }

    #[test]
    fn test_leading_v_is_normalized_away() {
        assert_eq!(v("v1.2.3"), Version::new(1, 2, 3));
        assert_eq!(v("V1.2.3").to_string(), "1.2.3");
    }

    #[test]
    fn test_version_normalized_display() {
        assert_eq!(v("1.0-alpha-1").to_string(), "1.0a1");
        assert_eq!(v("1.0.preview2").to_string(), "1.0rc2");
        assert_eq!(v("1.0-5").to_string(), "1.0.post5");
        assert_eq!(v("1.0.rev").to_string(), "1.0.post0");
        assert_eq!(v("1.0.0.dev").to_string(), "1.0.0.dev0");
        assert_eq!(v("1.0+Ubuntu-1").to_string(), "1.0+ubuntu.1");
    }

    #[test]
    fn test_trailing_zeros_are_equal() {
        assert_eq!(v("1.0"), v("1.0.0"));
        assert_eq!(v("1"), Version::new(1, 0, 0));
        assert_ne!(v("1.0.1"), v("1.0"));
    }

    #[test]
    fn test_pep440_ordering_chain() {
        let chain = [
            "1.0.dev456",
            "1.0a1",
            "1.0a2.dev456",
            "1.0a12.dev456",
            "1.0a12",
            "1.0b1.dev456",
            "1.0b2",
            "1.0b2.post345.dev456",
            "1.0b2.post345",
            "1.0rc1.dev456",
            "1.0rc1",
            "1.0",
            "1.0+abc.5",
            "1.0+abc.7",
            "1.0+5",
            "1.0.post456.dev34",
            "1.0.post456",
            "1.1.dev1",
        ];
        for pair in chain.windows(2) {
            assert!(
                v(pair[0]) < v(pair[1]),
                "expected {} < {}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_epoch_dominates() {
        assert!(v("1!0.1") > v("2.0"));
    }

    #[test]
    fn test_max_of_versions() {
        let versions = vec![v("1.5.0"), v("1.10.0"), v("1.9.9")];
        assert_eq!(versions.into_iter().max(), Some(v("1.10.0")));
    }

    #[test]
    fn test_zero_floor() {
        assert!(Version::zero() < v("0.0.1"));
        assert!(Version::zero() > v("0.0.0.dev1"));
    }

    #[test]
    fn test_is_prerelease() {
        assert!(v("1.0a1").is_prerelease());
        assert!(v("1.0.dev0").is_prerelease());
        assert!(!v("1.0.post1").is_prerelease());
    }
}
