use serde::{Deserialize, Serialize};

/// Recommended saturation ranges for one viewing environment, in percent.
///
/// `comfort` and `avoid` are closed ranges; `clear` lists the endpoints of
/// the two clear bands (low band, high band).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guidelines {
    pub comfort: [i64; 2],
    pub clear: [i64; 4],
    pub avoid: [i64; 2],
}

/// Guideline ranges derived from the study, by environment.
///
/// Environment names are matched case-insensitively; anything else gets
/// the cross-environment baseline.
pub fn guidelines_for(environment: &str) -> Guidelines {
    if environment.eq_ignore_ascii_case("indoor") {
        Guidelines {
            comfort: [45, 85],
            clear: [25, 45, 85, 95],
            avoid: [98, 100],
        }
    } else if environment.eq_ignore_ascii_case("outdoor") {
        Guidelines {
            comfort: [35, 75],
            clear: [15, 35, 75, 85],
            avoid: [90, 100],
        }
    } else {
        Guidelines {
            comfort: [40, 80],
            clear: [20, 40, 80, 90],
            avoid: [95, 100],
        }
    }
}
