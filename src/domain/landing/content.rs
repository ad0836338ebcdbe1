//! Landing page content as typed values.

use chrono::{Datelike, NaiveDate, Weekday};

/// A link in the header navigation or footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

impl NavLink {
    fn new(label: &str, href: impl Into<String>) -> Self {
        Self {
            label: label.to_string(),
            href: href.into(),
        }
    }
}

/// The single "recent activity" card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityCard {
    pub date: NaiveDate,
    pub title: String,
    pub detail: String,
}

impl ActivityCard {
    /// Date as shown on the card, e.g. "25 Jun 2025".
    pub fn date_label(&self) -> String {
        format_short_date(self.date)
    }
}

/// A static infographic entry: image, title, publication date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfographicCard {
    pub image: String,
    pub title: String,
    pub published: NaiveDate,
}

impl InfographicCard {
    fn new(image: &str, title: &str, published: NaiveDate) -> Self {
        Self {
            image: image.to_string(),
            title: title.to_string(),
            published,
        }
    }

    /// Date as shown on the card, e.g. "Sen, 7 Juli 2025".
    pub fn date_label(&self) -> String {
        format_long_date(self.published)
    }
}

/// Everything the landing page displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LandingPage {
    pub title: String,
    pub brand: String,
    pub logo: String,
    pub nav: Vec<NavLink>,
    pub recent_activity: ActivityCard,
    pub infographics: Vec<InfographicCard>,
    pub copyright: String,
    pub footer_links: Vec<NavLink>,
}

impl LandingPage {
    /// Builds the landing page. `public_url` prefixes the Home link.
    pub fn new(public_url: &str) -> Self {
        let home = format!("{}/admin", public_url.trim_end_matches('/'));
        let july_7 = date(2025, 7, 7);

        Self {
            title: "Activities & Infographics".to_string(),
            brand: "BerapaYa".to_string(),
            logo: "/img/logo.png".to_string(),
            nav: vec![
                NavLink::new("Home", home),
                NavLink::new("Search", "#"),
                NavLink::new("History", "#"),
                NavLink::new("Profile", "#"),
            ],
            recent_activity: ActivityCard {
                date: date(2025, 6, 25),
                title: "Nyeri kepala dan dada".to_string(),
                detail: "Laboratorium Dasar, Konsultasi Dokter Spesialis".to_string(),
            },
            infographics: vec![
                InfographicCard::new(
                    "/img/gedung.png",
                    "Golongan Rumah Sakit di Indonesia",
                    july_7,
                ),
                InfographicCard::new("/img/bpjs.png", "Panduan Klaim BPJS Kesehatan", july_7),
                InfographicCard::new(
                    "/img/kalkulator.png",
                    "Perbandingan Biaya Rawat Jalan & Rawat Inap",
                    july_7,
                ),
                InfographicCard::new(
                    "/img/bpjs.png",
                    "Apa yang Ditanggung BPJS vs Asuransi Swasta?",
                    july_7,
                ),
            ],
            copyright: "© 2025 MyHealth. All rights reserved.".to_string(),
            footer_links: vec![
                NavLink::new("Privacy", "#"),
                NavLink::new("Terms", "#"),
                NavLink::new("Contact", "#"),
            ],
        }
    }
}

impl Default for LandingPage {
    fn default() -> Self {
        Self::new("")
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

const MONTHS: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

const MONTHS_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "Mei", "Jun", "Jul", "Agu", "Sep", "Okt", "Nov", "Des",
];

fn weekday_short(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Sen",
        Weekday::Tue => "Sel",
        Weekday::Wed => "Rab",
        Weekday::Thu => "Kam",
        Weekday::Fri => "Jum",
        Weekday::Sat => "Sab",
        Weekday::Sun => "Min",
    }
}

/// "25 Jun 2025"
pub fn format_short_date(date: NaiveDate) -> String {
    format!(
        "{} {} {}",
        date.day(),
        MONTHS_SHORT[date.month0() as usize],
        date.year()
    )
}

/// "Sen, 7 Juli 2025"
pub fn format_long_date(date: NaiveDate) -> String {
    format!(
        "{}, {} {} {}",
        weekday_short(date.weekday()),
        date.day(),
        MONTHS[date.month0() as usize],
        date.year()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_date_uses_indonesian_abbreviation() {
        assert_eq!(format_short_date(date(2025, 6, 25)), "25 Jun 2025");
        assert_eq!(format_short_date(date(2025, 8, 17)), "17 Agu 2025");
    }

    #[test]
    fn long_date_includes_weekday() {
        assert_eq!(format_long_date(date(2025, 7, 7)), "Sen, 7 Juli 2025");
        assert_eq!(format_long_date(date(2025, 12, 28)), "Min, 28 Desember 2025");
    }

    #[test]
    fn default_page_has_four_infographics() {
        let page = LandingPage::default();
        assert_eq!(page.infographics.len(), 4);
        for card in &page.infographics {
            assert!(!card.title.is_empty());
            assert_eq!(card.date_label(), "Sen, 7 Juli 2025");
        }
    }

    #[test]
    fn recent_activity_matches_content() {
        let page = LandingPage::default();
        assert_eq!(page.recent_activity.date_label(), "25 Jun 2025");
        assert_eq!(page.recent_activity.title, "Nyeri kepala dan dada");
    }

    #[test]
    fn home_link_uses_public_url() {
        let page = LandingPage::new("https://berapaya.id/");
        assert_eq!(page.nav[0].href, "https://berapaya.id/admin");

        let page = LandingPage::default();
        assert_eq!(page.nav[0].href, "/admin");
    }
}
