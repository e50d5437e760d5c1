//! Static data set the dashboard runs against.
//!
//! Built once at process start by [`Fixtures::load`]; dates are relative to
//! the supplied `now` so the data always looks current.

use chrono::{DateTime, Duration, Months, Utc};
use qiq_common::{
    Badge, Certification, CertificationStatus, Checklist, ChecklistItem, ChecklistStatus,
    FailureHotspot, FailureRecord, HeatmapCell, LeaderboardEntry, Role, Sector, Severity,
    TrendSeries, User, UserStats,
};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Fixtures {
    pub users: Vec<User>,
    pub checklist_items: Vec<ChecklistItem>,
    pub checklists: Vec<Checklist>,
    pub failures: Vec<FailureRecord>,
    pub certifications: Vec<Certification>,
    pub hotspots: Vec<FailureHotspot>,
    pub trend_labels: Vec<String>,
    pub trend: Vec<TrendSeries>,
    pub heatmap_food: Vec<HeatmapCell>,
    pub heatmap_textile: Vec<HeatmapCell>,
    pub leaderboard: Vec<LeaderboardEntry>,
}

impl Fixtures {
    pub fn load(now: DateTime<Utc>) -> Self {
        let yesterday = now - Duration::days(1);
        let last_week = now - Duration::days(7);
        let next_month = now
            .checked_add_months(Months::new(1))
            .unwrap_or(now + Duration::days(30));

        let food_items = food_items();
        let textile_items = textile_items();

        let checklists = vec![
            Checklist {
                id: "cl1".into(),
                title: "Daily Food Safety Inspection".into(),
                description: "Morning inspection of preparation areas".into(),
                sector: Sector::Food,
                items: food_items[..3].to_vec(),
                completed_at: Some(yesterday),
                completed_by: Some("3".into()),
                status: ChecklistStatus::Completed,
            },
            Checklist {
                id: "cl2".into(),
                title: "Weekly Textile Quality Check".into(),
                description: "Comprehensive quality inspection for textile production".into(),
                sector: Sector::Textile,
                items: textile_items.clone(),
                completed_at: None,
                completed_by: None,
                status: ChecklistStatus::InProgress,
            },
            Checklist {
                id: "cl3".into(),
                title: "Food Packaging Inspection".into(),
                description: "Quality control for packaging process".into(),
                sector: Sector::Food,
                items: vec![
                    food_items[1].clone(),
                    food_items[2].clone(),
                    food_items[4].clone(),
                ],
                completed_at: None,
                completed_by: None,
                status: ChecklistStatus::Pending,
            },
        ];

        let failures = vec![
            FailureRecord {
                id: "fr1".into(),
                checklist_item_id: "f2".into(),
                sector: Sector::Food,
                timestamp: yesterday,
                description: "Packaging seals showing inconsistent closure on batch #45862"
                    .into(),
                severity: Severity::Medium,
                images: vec!["https://images.pexels.com/photos/5708177/pexels-photo-5708177.jpeg".into()],
                resolved_at: None,
                resolution: None,
            },
            FailureRecord {
                id: "fr2".into(),
                checklist_item_id: "t2".into(),
                sector: Sector::Textile,
                timestamp: last_week,
                description: "Color bleeding observed after wash test on red fabric batch #T892"
                    .into(),
                severity: Severity::High,
                images: vec!["https://images.pexels.com/photos/3812433/pexels-photo-3812433.jpeg".into()],
                resolved_at: Some(yesterday),
                resolution: Some(
                    "Adjusted dye concentration and re-tested with improved results".into(),
                ),
            },
        ];

        let certifications = vec![
            certification(
                "cert1",
                "FSSAI Certification",
                "Food Safety and Standards Authority of India",
                Sector::Food,
                &["Temperature Control", "Hygiene Standards", "Allergen Management"],
                CertificationStatus::Compliant,
                next_month,
            ),
            certification(
                "cert2",
                "FCCI Compliance",
                "Federation of Chambers of Commerce & Industry Textile Standards",
                Sector::Textile,
                &["Fabric Quality", "Dye Standards", "Production Process"],
                CertificationStatus::AtRisk,
                next_month,
            ),
            certification(
                "cert3",
                "ISO 22000",
                "Food safety management systems",
                Sector::Food,
                &["HACCP Implementation", "Risk Management", "Documentation"],
                CertificationStatus::Compliant,
                next_month,
            ),
            certification(
                "cert4",
                "OEKO-TEX Standard 100",
                "Textile testing for harmful substances",
                Sector::Textile,
                &["Chemical Testing", "Colorant Testing", "pH Value"],
                CertificationStatus::NonCompliant,
                next_month,
            ),
        ];

        let hotspots = vec![
            FailureHotspot {
                id: "hs1".into(),
                area: "Packaging Line 3".into(),
                description: "Inconsistent seal integrity".into(),
                sector: Sector::Food,
                occurrences: 12,
                suggested_fix: "Calibrate sealing machine temperature and pressure settings"
                    .into(),
                related_checklist_items: vec!["f2".into()],
            },
            FailureHotspot {
                id: "hs2".into(),
                area: "Dyeing Station B".into(),
                description: "Color fastness issues with red dyes".into(),
                sector: Sector::Textile,
                occurrences: 8,
                suggested_fix: "Adjust pH levels and increase fixative concentration".into(),
                related_checklist_items: vec!["t2".into()],
            },
        ];

        let mut checklist_items = food_items;
        checklist_items.extend(textile_items);

        Self {
            users: users(yesterday, last_week),
            checklist_items,
            checklists,
            failures,
            certifications,
            hotspots,
            trend_labels: ["Jan", "Feb", "Mar", "Apr", "May", "Jun"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            trend: vec![
                TrendSeries {
                    label: "Food Sector Failures".into(),
                    data: vec![12, 19, 10, 5, 8, 3],
                },
                TrendSeries {
                    label: "Textile Sector Failures".into(),
                    data: vec![8, 15, 17, 12, 7, 5],
                },
            ],
            heatmap_food: heatmap(&[
                ("Packaging", [3, 2, 5, 1, 0]),
                ("Storage", [1, 0, 2, 3, 4]),
                ("Hygiene", [0, 1, 0, 2, 1]),
            ]),
            heatmap_textile: heatmap(&[
                ("Weaving", [4, 2, 1, 0, 2]),
                ("Dyeing", [5, 3, 2, 1, 0]),
                ("Stitching", [1, 2, 3, 4, 2]),
            ]),
            leaderboard: leaderboard(),
        }
    }

    pub fn checklist_items_by_sector(&self, sector: Sector) -> Vec<&ChecklistItem> {
        self.checklist_items
            .iter()
            .filter(|i| i.sector == sector)
            .collect()
    }

    pub fn certifications_by_sector(&self, sector: Sector) -> Vec<&Certification> {
        self.certifications
            .iter()
            .filter(|c| c.sector == sector)
            .collect()
    }

    pub fn heatmap(&self, sector: Sector) -> &[HeatmapCell] {
        match sector {
            Sector::Food => &self.heatmap_food,
            Sector::Textile => &self.heatmap_textile,
        }
    }

    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn checklist(&self, id: &str) -> Option<&Checklist> {
        self.checklists.iter().find(|c| c.id == id)
    }

    pub fn checklist_item(&self, id: &str) -> Option<&ChecklistItem> {
        self.checklist_items.iter().find(|i| i.id == id)
    }

    pub fn failure(&self, id: &str) -> Option<&FailureRecord> {
        self.failures.iter().find(|f| f.id == id)
    }

    pub fn certification(&self, id: &str) -> Option<&Certification> {
        self.certifications.iter().find(|c| c.id == id)
    }

    pub fn hotspot(&self, id: &str) -> Option<&FailureHotspot> {
        self.hotspots.iter().find(|h| h.id == id)
    }
}

const WEEKDAYS: [&str; 5] = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"];

fn heatmap(rows: &[(&str, [u32; 5])]) -> Vec<HeatmapCell> {
    rows.iter()
        .flat_map(|(category, values)| {
            WEEKDAYS
                .iter()
                .zip(values)
                .map(move |(day, value)| HeatmapCell::new(*category, *day, *value))
        })
        .collect()
}

fn item(
    id: &str,
    title: &str,
    description: &str,
    sector: Sector,
    category: &str,
    failure_rate: f64,
    certifications: &[&str],
) -> ChecklistItem {
    ChecklistItem {
        id: id.into(),
        title: title.into(),
        description: description.into(),
        sector,
        category: category.into(),
        failure_rate,
        is_required: true,
        certifications: certifications.iter().map(|c| c.to_string()).collect(),
    }
}

#[rustfmt::skip]
fn food_items() -> Vec<ChecklistItem> {
    let s = Sector::Food;
    vec![
        item("f1", "Temperature Control", "Verify food storage temperatures are within safe limits", s, "Storage", 0.05, &["FSSAI"]),
        item("f2", "Packaging Seal Integrity", "Check all packaging seals for proper closure and integrity", s, "Packaging", 0.08, &["FSSAI", "ISO 22000"]),
        item("f3", "Expiration Date Verification", "Verify correct expiration dates are printed on all packages", s, "Labeling", 0.03, &["FSSAI"]),
        item("f4", "Cross-Contamination Prevention", "Ensure separation between raw and cooked products", s, "Hygiene", 0.07, &["FSSAI", "ISO 22000"]),
        item("f5", "Allergen Control", "Verify allergen controls and labeling are properly implemented", s, "Labeling", 0.06, &["FSSAI", "ISO 22000"]),
    ]
}

#[rustfmt::skip]
fn textile_items() -> Vec<ChecklistItem> {
    let s = Sector::Textile;
    vec![
        item("t1", "Fabric Tension", "Check fabric tension is within specified parameters", s, "Weaving", 0.09, &["FCCI"]),
        item("t2", "Color Fastness", "Test color fastness against rubbing and washing", s, "Dyeing", 0.12, &["FCCI", "OEKO-TEX"]),
        item("t3", "Stitch Density", "Verify stitch density meets quality specifications", s, "Stitching", 0.07, &["FCCI"]),
        item("t4", "Dimensional Stability", "Check fabric maintains dimensions after washing", s, "Finishing", 0.11, &["OEKO-TEX"]),
        item("t5", "Seam Strength", "Test seam strength for durability and quality", s, "Stitching", 0.08, &["FCCI"]),
    ]
}

fn certification(
    id: &str,
    name: &str,
    description: &str,
    sector: Sector,
    requirements: &[&str],
    status: CertificationStatus,
    expires_at: DateTime<Utc>,
) -> Certification {
    Certification {
        id: id.into(),
        name: name.into(),
        description: description.into(),
        sector,
        requirements: requirements.iter().map(|r| r.to_string()).collect(),
        status,
        expires_at: Some(expires_at),
    }
}

fn badge(id: &str, name: &str, description: &str, icon: &str, earned_at: DateTime<Utc>) -> Badge {
    Badge {
        id: id.into(),
        name: name.into(),
        description: description.into(),
        icon: icon.into(),
        earned_at: Some(earned_at),
    }
}

fn users(yesterday: DateTime<Utc>, last_week: DateTime<Utc>) -> Vec<User> {
    vec![
        User {
            id: "1".into(),
            name: "Alex Johnson".into(),
            role: Role::Admin,
            department: "Quality Assurance".into(),
            badges: vec![
                badge("b1", "Quality Master", "Completed 100 quality checks", "award", last_week),
                badge("b2", "Defect Hunter", "Found 50 defects", "search", yesterday),
            ],
            stats: UserStats {
                checks_completed: 342,
                defects_found: 87,
                certification_score: 98,
            },
        },
        User {
            id: "2".into(),
            name: "Sam Rivera".into(),
            role: Role::Manager,
            department: "Production".into(),
            badges: vec![badge(
                "b3",
                "Team Leader",
                "Led a team with 95% quality score",
                "users",
                last_week,
            )],
            stats: UserStats {
                checks_completed: 156,
                defects_found: 42,
                certification_score: 85,
            },
        },
        User {
            id: "3".into(),
            name: "Morgan Chen".into(),
            role: Role::QualityChecker,
            department: "Food Production".into(),
            badges: vec![],
            stats: UserStats {
                checks_completed: 89,
                defects_found: 23,
                certification_score: 76,
            },
        },
    ]
}

fn leaderboard() -> Vec<LeaderboardEntry> {
    [
        ("1", "Alex Johnson", 98, "Quality Assurance", 2),
        ("4", "Taylor Smith", 92, "Food Production", 3),
        ("5", "Jordan Lee", 89, "Textile Quality", 2),
        ("2", "Sam Rivera", 85, "Production", 1),
        ("6", "Casey Brown", 82, "Food Safety", 1),
        ("7", "Avery Johnson", 79, "Textile Production", 1),
        ("3", "Morgan Chen", 76, "Food Production", 0),
        ("8", "Robin Garcia", 72, "Quality Control", 0),
    ]
    .into_iter()
    .map(|(id, name, score, department, badges)| LeaderboardEntry {
        id: id.into(),
        name: name.into(),
        score,
        department: department.into(),
        badges,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::collections::HashSet;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 31, 8, 0, 0).unwrap()
    }

    #[test]
    fn keys_are_unique_within_each_collection() {
        let data = Fixtures::load(now());
        let unique = |ids: Vec<&str>| ids.len() == ids.iter().collect::<HashSet<_>>().len();
        assert!(unique(data.checklists.iter().map(|c| c.id.as_str()).collect()));
        assert!(unique(data.failures.iter().map(|f| f.id.as_str()).collect()));
        assert!(unique(data.certifications.iter().map(|c| c.id.as_str()).collect()));
        assert!(unique(data.checklist_items.iter().map(|i| i.id.as_str()).collect()));
        assert!(unique(data.leaderboard.iter().map(|e| e.id.as_str()).collect()));
    }

    #[test]
    fn failure_and_hotspot_sectors_match_their_items() {
        let data = Fixtures::load(now());
        for failure in &data.failures {
            let item = data.checklist_item(&failure.checklist_item_id).unwrap();
            assert_eq!(item.sector, failure.sector);
        }
        for hotspot in &data.hotspots {
            for id in &hotspot.related_checklist_items {
                assert_eq!(data.checklist_item(id).unwrap().sector, hotspot.sector);
            }
        }
    }

    #[test]
    fn dates_are_relative_to_now() {
        let data = Fixtures::load(now());
        let completed = data.checklist("cl1").unwrap().completed_at.unwrap();
        assert_eq!(completed, now() - Duration::days(1));
        // Jan 31 + 1 month clamps to the end of February.
        let expires = data.certification("cert1").unwrap().expires_at.unwrap();
        assert_eq!(expires, Utc.with_ymd_and_hms(2025, 2, 28, 8, 0, 0).unwrap());
    }

    #[test]
    fn sector_lookups_split_evenly() {
        let data = Fixtures::load(now());
        assert_eq!(data.checklist_items_by_sector(Sector::Food).len(), 5);
        assert_eq!(data.checklist_items_by_sector(Sector::Textile).len(), 5);
        assert_eq!(data.certifications_by_sector(Sector::Textile).len(), 2);
        assert_eq!(data.heatmap(Sector::Food).len(), 15);
    }
}
