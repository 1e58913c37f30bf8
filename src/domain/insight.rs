//! Catalog of the canned aggregate queries offered by the dashboard.
//!
//! Every entry is a literal, parameter-free SQLite query over
//! `traffic_stops`. The engine does all of the analytical work; the
//! application only picks the string and renders whatever comes back.

use serde::Serialize;

/// Upper bound on the number of result columns any catalog query produces.
pub const MAX_INSIGHT_COLUMNS: usize = 4;

/// Selectable aggregate queries in menu order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "&'static str")]
pub enum InsightKind {
    #[default]
    VehiclesMostSearched,
    AgeArrestRate,
    GenderByCountry,
    RaceGenderSearchRate,
    StopsByHour,
    AverageDurationByViolation,
    NightVersusDayArrests,
    ViolationSearchesAndArrests,
    YoungDriverViolations,
    ViolationsWithoutSearchOrArrest,
    DrugStopsByCountry,
    ArrestRateByCountryAndViolation,
    SearchesByCountry,
    YearlyStopsByCountry,
    DrugRelatedVehicles,
}

impl InsightKind {
    pub const ALL: [InsightKind; 15] = [
        InsightKind::VehiclesMostSearched,
        InsightKind::AgeArrestRate,
        InsightKind::GenderByCountry,
        InsightKind::RaceGenderSearchRate,
        InsightKind::StopsByHour,
        InsightKind::AverageDurationByViolation,
        InsightKind::NightVersusDayArrests,
        InsightKind::ViolationSearchesAndArrests,
        InsightKind::YoungDriverViolations,
        InsightKind::ViolationsWithoutSearchOrArrest,
        InsightKind::DrugStopsByCountry,
        InsightKind::ArrestRateByCountryAndViolation,
        InsightKind::SearchesByCountry,
        InsightKind::YearlyStopsByCountry,
        InsightKind::DrugRelatedVehicles,
    ];

    /// Stable identifier used in URLs and the API.
    pub const fn slug(self) -> &'static str {
        match self {
            InsightKind::VehiclesMostSearched => "vehicles-most-searched",
            InsightKind::AgeArrestRate => "age-arrest-rate",
            InsightKind::GenderByCountry => "gender-by-country",
            InsightKind::RaceGenderSearchRate => "race-gender-search-rate",
            InsightKind::StopsByHour => "stops-by-hour",
            InsightKind::AverageDurationByViolation => "average-duration-by-violation",
            InsightKind::NightVersusDayArrests => "night-vs-day-arrests",
            InsightKind::ViolationSearchesAndArrests => "violation-searches-arrests",
            InsightKind::YoungDriverViolations => "young-driver-violations",
            InsightKind::ViolationsWithoutSearchOrArrest => "violations-without-search-or-arrest",
            InsightKind::DrugStopsByCountry => "drug-stops-by-country",
            InsightKind::ArrestRateByCountryAndViolation => "arrest-rate-by-country-violation",
            InsightKind::SearchesByCountry => "searches-by-country",
            InsightKind::YearlyStopsByCountry => "yearly-stops-by-country",
            InsightKind::DrugRelatedVehicles => "drug-related-vehicles",
        }
    }

    /// Human readable menu label.
    pub const fn title(self) -> &'static str {
        match self {
            InsightKind::VehiclesMostSearched => "Vehicles Most Frequently Searched",
            InsightKind::AgeArrestRate => "Driver Age Group with Highest Arrest Rate",
            InsightKind::GenderByCountry => {
                "Gender Distribution of Drivers Stopped in Each Country"
            }
            InsightKind::RaceGenderSearchRate => "Race & Gender with Highest Search Rate",
            InsightKind::StopsByHour => "Time of Day with Most Traffic Stops",
            InsightKind::AverageDurationByViolation => "Average Stop Duration by Violation",
            InsightKind::NightVersusDayArrests => "Are Night Stops More Likely to Lead to Arrests?",
            InsightKind::ViolationSearchesAndArrests => {
                "Violations Associated with Searches/Arrests"
            }
            InsightKind::YoungDriverViolations => "Violations Common Among Younger Drivers (<25)",
            InsightKind::ViolationsWithoutSearchOrArrest => {
                "Violations Rarely Resulting in Search/Arrest"
            }
            InsightKind::DrugStopsByCountry => "Countries with Highest Drug-Related Stops",
            InsightKind::ArrestRateByCountryAndViolation => "Arrest Rate by Country & Violation",
            InsightKind::SearchesByCountry => "Country with Most Stops Involving Searches",
            InsightKind::YearlyStopsByCountry => "Yearly Breakdown of Stops & Arrests by Country",
            InsightKind::DrugRelatedVehicles => "Top 10 Vehicle Numbers in Drug-Related Stops",
        }
    }

    /// Result column names, in the order the query projects them.
    pub const fn columns(self) -> &'static [&'static str] {
        match self {
            InsightKind::VehiclesMostSearched => &["vehicle_number", "search_count"],
            InsightKind::AgeArrestRate => &["driver_age", "arrest_rate"],
            InsightKind::GenderByCountry => &["country_name", "driver_gender", "stop_count"],
            InsightKind::RaceGenderSearchRate => &["driver_race", "driver_gender", "search_rate"],
            InsightKind::StopsByHour => &["hour_of_day", "stop_count"],
            InsightKind::AverageDurationByViolation => &["violation", "avg_duration"],
            InsightKind::NightVersusDayArrests => &["time_period", "arrest_rate"],
            InsightKind::ViolationSearchesAndArrests => {
                &["violation", "total_searches", "total_arrests"]
            }
            InsightKind::YoungDriverViolations => &["violation", "stop_count"],
            InsightKind::ViolationsWithoutSearchOrArrest => &["violation"],
            InsightKind::DrugStopsByCountry => &["country_name", "drug_stops"],
            InsightKind::ArrestRateByCountryAndViolation => {
                &["country_name", "violation", "arrest_rate"]
            }
            InsightKind::SearchesByCountry => &["country_name", "total_searches"],
            InsightKind::YearlyStopsByCountry => {
                &["country_name", "year", "total_stops", "total_arrests"]
            }
            InsightKind::DrugRelatedVehicles => &["vehicle_number", "stop_count"],
        }
    }

    /// The literal SQL executed for this insight.
    pub const fn sql(self) -> &'static str {
        match self {
            InsightKind::VehiclesMostSearched => {
                "SELECT vehicle_number, COUNT(*) AS search_count \
                 FROM traffic_stops \
                 WHERE search_conducted = 1 \
                 GROUP BY vehicle_number \
                 ORDER BY search_count DESC, vehicle_number \
                 LIMIT 10"
            }
            InsightKind::AgeArrestRate => {
                "SELECT driver_age, \
                        ROUND(SUM(is_arrested) * 100.0 / COUNT(*), 2) AS arrest_rate \
                 FROM traffic_stops \
                 GROUP BY driver_age \
                 ORDER BY arrest_rate DESC, driver_age \
                 LIMIT 10"
            }
            InsightKind::GenderByCountry => {
                "SELECT country_name, driver_gender, COUNT(*) AS stop_count \
                 FROM traffic_stops \
                 GROUP BY country_name, driver_gender \
                 ORDER BY country_name, driver_gender"
            }
            InsightKind::RaceGenderSearchRate => {
                "SELECT driver_race, driver_gender, \
                        ROUND(SUM(search_conducted) * 100.0 / COUNT(*), 2) AS search_rate \
                 FROM traffic_stops \
                 GROUP BY driver_race, driver_gender \
                 ORDER BY search_rate DESC, driver_race, driver_gender \
                 LIMIT 10"
            }
            InsightKind::StopsByHour => {
                "SELECT CAST(strftime('%H', stop_time) AS INTEGER) AS hour_of_day, \
                        COUNT(*) AS stop_count \
                 FROM traffic_stops \
                 GROUP BY hour_of_day \
                 ORDER BY stop_count DESC, hour_of_day"
            }
            InsightKind::AverageDurationByViolation => {
                "SELECT violation, \
                        ROUND(AVG(CASE stop_duration \
                                      WHEN '0-15 Min' THEN 7.5 \
                                      WHEN '16-30 Min' THEN 23.0 \
                                      WHEN '30+ Min' THEN 45.0 \
                                      ELSE CAST(stop_duration AS REAL) END), 2) AS avg_duration \
                 FROM traffic_stops \
                 GROUP BY violation \
                 ORDER BY violation"
            }
            InsightKind::NightVersusDayArrests => {
                "SELECT CASE WHEN CAST(strftime('%H', stop_time) AS INTEGER) BETWEEN 20 AND 23 \
                               OR CAST(strftime('%H', stop_time) AS INTEGER) BETWEEN 0 AND 5 \
                             THEN 'Night' ELSE 'Day' END AS time_period, \
                        ROUND(SUM(is_arrested) * 100.0 / COUNT(*), 2) AS arrest_rate \
                 FROM traffic_stops \
                 GROUP BY time_period \
                 ORDER BY time_period"
            }
            InsightKind::ViolationSearchesAndArrests => {
                "SELECT violation, \
                        SUM(search_conducted) AS total_searches, \
                        SUM(is_arrested) AS total_arrests \
                 FROM traffic_stops \
                 GROUP BY violation \
                 ORDER BY total_searches DESC, total_arrests DESC, violation"
            }
            InsightKind::YoungDriverViolations => {
                "SELECT violation, COUNT(*) AS stop_count \
                 FROM traffic_stops \
                 WHERE driver_age < 25 \
                 GROUP BY violation \
                 ORDER BY stop_count DESC, violation"
            }
            InsightKind::ViolationsWithoutSearchOrArrest => {
                "SELECT violation \
                 FROM traffic_stops \
                 GROUP BY violation \
                 HAVING SUM(search_conducted) = 0 AND SUM(is_arrested) = 0 \
                 ORDER BY violation"
            }
            InsightKind::DrugStopsByCountry => {
                "SELECT country_name, COUNT(*) AS drug_stops \
                 FROM traffic_stops \
                 WHERE violation LIKE '%drug%' \
                 GROUP BY country_name \
                 ORDER BY drug_stops DESC, country_name"
            }
            InsightKind::ArrestRateByCountryAndViolation => {
                "SELECT country_name, violation, \
                        ROUND(SUM(is_arrested) * 100.0 / COUNT(*), 2) AS arrest_rate \
                 FROM traffic_stops \
                 GROUP BY country_name, violation \
                 ORDER BY arrest_rate DESC, country_name, violation \
                 LIMIT 20"
            }
            InsightKind::SearchesByCountry => {
                "SELECT country_name, SUM(search_conducted) AS total_searches \
                 FROM traffic_stops \
                 GROUP BY country_name \
                 ORDER BY total_searches DESC, country_name"
            }
            InsightKind::YearlyStopsByCountry => {
                "SELECT country_name, \
                        CAST(strftime('%Y', stop_date) AS INTEGER) AS year, \
                        COUNT(*) AS total_stops, \
                        SUM(is_arrested) AS total_arrests \
                 FROM traffic_stops \
                 GROUP BY country_name, year \
                 ORDER BY year, country_name"
            }
            InsightKind::DrugRelatedVehicles => {
                "SELECT vehicle_number, COUNT(*) AS stop_count \
                 FROM traffic_stops \
                 WHERE violation LIKE '%drug%' \
                 GROUP BY vehicle_number \
                 ORDER BY stop_count DESC, vehicle_number \
                 LIMIT 10"
            }
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.slug() == slug)
    }
}

impl From<InsightKind> for &'static str {
    fn from(kind: InsightKind) -> Self {
        kind.slug()
    }
}

/// Menu entry describing one insight to the templates and the API.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct InsightSummary {
    pub slug: &'static str,
    pub title: &'static str,
    pub columns: &'static [&'static str],
}

impl From<InsightKind> for InsightSummary {
    fn from(kind: InsightKind) -> Self {
        Self {
            slug: kind.slug(),
            title: kind.title(),
            columns: kind.columns(),
        }
    }
}

/// Result set of one insight with every value rendered as text.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct InsightTable {
    pub kind: InsightKind,
    pub title: &'static str,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl InsightTable {
    pub fn new(kind: InsightKind, rows: Vec<Vec<String>>) -> Self {
        Self {
            kind,
            title: kind.title(),
            columns: kind.columns().iter().map(|c| c.to_string()).collect(),
            rows,
        }
    }
}
