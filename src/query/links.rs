//! Profile page links for resolved divisions.

use electorate::Jurisdiction;

const AEC_PROFILE_URL: &str = "https://www.aec.gov.au/profiles";
const WIKIPEDIA_URL: &str = "https://en.wikipedia.org/wiki";

/// AEC profile page for a federal division
pub fn federal_profile_url(jurisdiction: Jurisdiction, division: &str) -> String {
    format!(
        "{}/{}/{}.htm",
        AEC_PROFILE_URL,
        jurisdiction.code().to_lowercase(),
        division.to_lowercase()
    )
}

/// Wikipedia article for a state or territory division
pub fn local_profile_url(jurisdiction: Jurisdiction, division: &str) -> Option<String> {
    let title = division.replace(' ', "_");
    let article = match jurisdiction {
        Jurisdiction::Federal => return None,
        Jurisdiction::Act => format!("{}_electorate", title),
        Jurisdiction::Nt => format!("Electoral_division_of_{}", title),
        Jurisdiction::Tas => format!("Division_of_{}_(state)", title),
        Jurisdiction::Nsw
        | Jurisdiction::Qld
        | Jurisdiction::Sa
        | Jurisdiction::Vic
        | Jurisdiction::Wa => format!("Electoral_district_of_{}", title),
    };
    Some(format!("{}/{}", WIKIPEDIA_URL, article))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_federal_profile_url() {
        assert_eq!(
            federal_profile_url(Jurisdiction::Qld, "Brisbane"),
            "https://www.aec.gov.au/profiles/qld/brisbane.htm"
        );
    }

    #[test]
    fn test_local_profile_url_patterns() {
        assert_eq!(
            local_profile_url(Jurisdiction::Qld, "South Brisbane").unwrap(),
            "https://en.wikipedia.org/wiki/Electoral_district_of_South_Brisbane"
        );
        assert_eq!(
            local_profile_url(Jurisdiction::Act, "Kurrajong").unwrap(),
            "https://en.wikipedia.org/wiki/Kurrajong_electorate"
        );
        assert_eq!(
            local_profile_url(Jurisdiction::Nt, "Fannie Bay").unwrap(),
            "https://en.wikipedia.org/wiki/Electoral_division_of_Fannie_Bay"
        );
        assert_eq!(
            local_profile_url(Jurisdiction::Tas, "Clark").unwrap(),
            "https://en.wikipedia.org/wiki/Division_of_Clark_(state)"
        );
        assert!(local_profile_url(Jurisdiction::Federal, "Brisbane").is_none());
    }
}
