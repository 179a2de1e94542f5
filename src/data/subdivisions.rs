// ISO 3166-2 subdivision tables. Maintained by hand; countries absent from
// this table have no subdivisions registered in the crate.

use crate::core::country::CountryCode;
use crate::core::subdivision::Subdivision;

const fn sub(code: &'static str, name: &'static str) -> Subdivision {
    Subdivision { code, name }
}

/// Per-country subdivision tables, keyed by ISO 3166-1 numeric code.
pub static SUBDIVISIONS: &[(CountryCode, &[Subdivision])] = &[
    (
        // United States of America
        CountryCode(840),
        &[
            sub("US-AL", "Alabama"),
            sub("US-AK", "Alaska"),
            sub("US-AZ", "Arizona"),
            sub("US-AR", "Arkansas"),
            sub("US-CA", "California"),
            sub("US-CO", "Colorado"),
            sub("US-CT", "Connecticut"),
            sub("US-DE", "Delaware"),
            sub("US-FL", "Florida"),
            sub("US-GA", "Georgia"),
            sub("US-HI", "Hawaii"),
            sub("US-ID", "Idaho"),
            sub("US-IL", "Illinois"),
            sub("US-IN", "Indiana"),
            sub("US-IA", "Iowa"),
            sub("US-KS", "Kansas"),
            sub("US-KY", "Kentucky"),
            sub("US-LA", "Louisiana"),
            sub("US-ME", "Maine"),
            sub("US-MD", "Maryland"),
            sub("US-MA", "Massachusetts"),
            sub("US-MI", "Michigan"),
            sub("US-MN", "Minnesota"),
            sub("US-MS", "Mississippi"),
            sub("US-MO", "Missouri"),
            sub("US-MT", "Montana"),
            sub("US-NE", "Nebraska"),
            sub("US-NV", "Nevada"),
            sub("US-NH", "New Hampshire"),
            sub("US-NJ", "New Jersey"),
            sub("US-NM", "New Mexico"),
            sub("US-NY", "New York"),
            sub("US-NC", "North Carolina"),
            sub("US-ND", "North Dakota"),
            sub("US-OH", "Ohio"),
            sub("US-OK", "Oklahoma"),
            sub("US-OR", "Oregon"),
            sub("US-PA", "Pennsylvania"),
            sub("US-RI", "Rhode Island"),
            sub("US-SC", "South Carolina"),
            sub("US-SD", "South Dakota"),
            sub("US-TN", "Tennessee"),
            sub("US-TX", "Texas"),
            sub("US-UT", "Utah"),
            sub("US-VT", "Vermont"),
            sub("US-VA", "Virginia"),
            sub("US-WA", "Washington"),
            sub("US-WV", "West Virginia"),
            sub("US-WI", "Wisconsin"),
            sub("US-WY", "Wyoming"),
            sub("US-DC", "District of Columbia"),
        ],
    ),
    (
        // Canada
        CountryCode(124),
        &[
            sub("CA-AB", "Alberta"),
            sub("CA-BC", "British Columbia"),
            sub("CA-MB", "Manitoba"),
            sub("CA-NB", "New Brunswick"),
            sub("CA-NL", "Newfoundland and Labrador"),
            sub("CA-NS", "Nova Scotia"),
            sub("CA-NT", "Northwest Territories"),
            sub("CA-NU", "Nunavut"),
            sub("CA-ON", "Ontario"),
            sub("CA-PE", "Prince Edward Island"),
            sub("CA-QC", "Quebec"),
            sub("CA-SK", "Saskatchewan"),
            sub("CA-YT", "Yukon"),
        ],
    ),
    (
        // Australia
        CountryCode(36),
        &[
            sub("AU-NSW", "New South Wales"),
            sub("AU-QLD", "Queensland"),
            sub("AU-SA", "South Australia"),
            sub("AU-TAS", "Tasmania"),
            sub("AU-VIC", "Victoria"),
            sub("AU-WA", "Western Australia"),
            sub("AU-ACT", "Australian Capital Territory"),
            sub("AU-NT", "Northern Territory"),
        ],
    ),
    (
        // Germany
        CountryCode(276),
        &[
            sub("DE-BW", "Baden-Wurttemberg"),
            sub("DE-BY", "Bayern"),
            sub("DE-BE", "Berlin"),
            sub("DE-BB", "Brandenburg"),
            sub("DE-HB", "Bremen"),
            sub("DE-HH", "Hamburg"),
            sub("DE-HE", "Hessen"),
            sub("DE-MV", "Mecklenburg-Vorpommern"),
            sub("DE-NI", "Niedersachsen"),
            sub("DE-NW", "Nordrhein-Westfalen"),
            sub("DE-RP", "Rheinland-Pfalz"),
            sub("DE-SL", "Saarland"),
            sub("DE-SN", "Sachsen"),
            sub("DE-ST", "Sachsen-Anhalt"),
            sub("DE-SH", "Schleswig-Holstein"),
            sub("DE-TH", "Thuringen"),
        ],
    ),
    (
        // United Kingdom
        CountryCode(826),
        &[
            sub("GB-ENG", "England"),
            sub("GB-SCT", "Scotland"),
            sub("GB-WLS", "Wales"),
            sub("GB-NIR", "Northern Ireland"),
        ],
    ),
];
