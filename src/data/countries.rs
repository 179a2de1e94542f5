// Generated from the upstream ISO 3166 / ITU reference dataset.
// Do not edit by hand; regenerate when the dataset is refreshed.

use crate::core::country::{CallCode, CountryCode, CountryRecord};
use crate::core::currency::CurrencyCode;
use crate::core::region::RegionCode;

/// Every ISO 3166-1 country known to the crate, in dataset registration order.
pub static COUNTRIES: &[CountryRecord] = &[
    CountryRecord {
        code: CountryCode(36),
        name: "Australia",
        alpha2: "AU",
        alpha3: "AUS",
        fips: "AS",
        ioc: "AUS",
        fifa: "AUS",
        capital: "Canberra",
        currency: CurrencyCode(36),
        call_codes: &[CallCode(61)],
        region: RegionCode::Oceania,
    },
    CountryRecord {
        code: CountryCode(40),
        name: "Austria",
        alpha2: "AT",
        alpha3: "AUT",
        fips: "AU",
        ioc: "AUT",
        fifa: "AUT",
        capital: "Vienna",
        currency: CurrencyCode(978),
        call_codes: &[CallCode(43)],
        region: RegionCode::Europe,
    },
    CountryRecord {
        code: CountryCode(31),
        name: "Azerbaijan",
        alpha2: "AZ",
        alpha3: "AZE",
        fips: "AJ",
        ioc: "AZE",
        fifa: "AZE",
        capital: "Baku",
        currency: CurrencyCode(944),
        call_codes: &[CallCode(994)],
        region: RegionCode::Asia,
    },
    CountryRecord {
        code: CountryCode(8),
        name: "Albania",
        alpha2: "AL",
        alpha3: "ALB",
        fips: "AL",
        ioc: "ALB",
        fifa: "ALB",
        capital: "Tirana",
        currency: CurrencyCode(8),
        call_codes: &[CallCode(355)],
        region: RegionCode::Europe,
    },
    CountryRecord {
        code: CountryCode(12),
        name: "Algeria",
        alpha2: "DZ",
        alpha3: "DZA",
        fips: "AG",
        ioc: "ALG",
        fifa: "DZA",
        capital: "Algiers",
        currency: CurrencyCode(12),
        call_codes: &[CallCode(213)],
        region: RegionCode::Africa,
    },
    CountryRecord {
        code: CountryCode(16),
        name: "American Samoa",
        alpha2: "AS",
        alpha3: "ASM",
        fips: "AQ",
        ioc: "ASA",
        fifa: "ASM",
        capital: "Pago Pago",
        currency: CurrencyCode(840),
        call_codes: &[CallCode(1684)],
        region: RegionCode::Oceania,
    },
    CountryRecord {
        code: CountryCode(660),
        name: "Anguilla",
        alpha2: "AI",
        alpha3: "AIA",
        fips: "AV",
        ioc: "AIA",
        fifa: "AIA",
        capital: "The Valley",
        currency: CurrencyCode(951),
        call_codes: &[CallCode(1264)],
        region: RegionCode::NorthAmerica,
    },
    CountryRecord {
        code: CountryCode(24),
        name: "Angola",
        alpha2: "AO",
        alpha3: "AGO",
        fips: "AO",
        ioc: "ANG",
        fifa: "AGO",
        capital: "Luanda",
        currency: CurrencyCode(973),
        call_codes: &[CallCode(244)],
        region: RegionCode::Africa,
    },
    CountryRecord {
        code: CountryCode(20),
        name: "Andorra",
        alpha2: "AD",
        alpha3: "AND",
        fips: "AN",
        ioc: "AND",
        fifa: "AND",
        capital: "Andorra la Vella",
        currency: CurrencyCode(978),
        call_codes: &[CallCode(376)],
        region: RegionCode::Europe,
    },
    CountryRecord {
        code: CountryCode(10),
        name: "Antarctica",
        alpha2: "AQ",
        alpha3: "ATA",
        fips: "AY",
        ioc: "ATA",
        fifa: "ATA",
        capital: "",
        currency: CurrencyCode::NONE,
        call_codes: &[CallCode(672)],
        region: RegionCode::Antarctica,
    },
    CountryRecord {
        code: CountryCode(28),
        name: "Antigua and Barbuda",
        alpha2: "AG",
        alpha3: "ATG",
        fips: "AC",
        ioc: "ANT",
        fifa: "ATG",
        capital: "Saint John's",
        currency: CurrencyCode(951),
        call_codes: &[CallCode(1268)],
        region: RegionCode::NorthAmerica,
    },
    CountryRecord {
        code: CountryCode(530),
        name: "Netherlands Antilles",
        alpha2: "AN",
        alpha3: "ANT",
        fips: "NT",
        ioc: "AHO",
        fifa: "ANT",
        capital: "Willemstad",
        currency: CurrencyCode(532),
        call_codes: &[CallCode(599)],
        region: RegionCode::NorthAmerica,
    },
    CountryRecord {
        code: CountryCode(784),
        name: "United Arab Emirates",
        alpha2: "AE",
        alpha3: "ARE",
        fips: "AE",
        ioc: "UAE",
        fifa: "ARE",
        capital: "Abu Dhabi",
        currency: CurrencyCode(784),
        call_codes: &[CallCode(971)],
        region: RegionCode::Asia,
    },
    CountryRecord {
        code: CountryCode(32),
        name: "Argentina",
        alpha2: "AR",
        alpha3: "ARG",
        fips: "AR",
        ioc: "ARG",
        fifa: "ARG",
        capital: "Buenos Aires",
        currency: CurrencyCode(32),
        call_codes: &[CallCode(54)],
        region: RegionCode::SouthAmerica,
    },
    CountryRecord {
        code: CountryCode(51),
        name: "Armenia",
        alpha2: "AM",
        alpha3: "ARM",
        fips: "AM",
        ioc: "ARM",
        fifa: "ARM",
        capital: "Yerevan",
        currency: CurrencyCode(51),
        call_codes: &[CallCode(374)],
        region: RegionCode::Asia,
    },
    CountryRecord {
        code: CountryCode(533),
        name: "Aruba",
        alpha2: "AW",
        alpha3: "ABW",
        fips: "AA",
        ioc: "ARU",
        fifa: "ABW",
        capital: "Oranjestad",
        currency: CurrencyCode(533),
        call_codes: &[CallCode(297), CallCode(5998)],
        region: RegionCode::NorthAmerica,
    },
    CountryRecord {
        code: CountryCode(4),
        name: "Afghanistan",
        alpha2: "AF",
        alpha3: "AFG",
        fips: "AF",
        ioc: "AFG",
        fifa: "AFG",
        capital: "Kabul",
        currency: CurrencyCode(971),
        call_codes: &[CallCode(93)],
        region: RegionCode::Asia,
    },
    CountryRecord {
        code: CountryCode(44),
        name: "Bahamas",
        alpha2: "BS",
        alpha3: "BHS",
        fips: "BF",
        ioc: "BAH",
        fifa: "BHS",
        capital: "Nassau",
        currency: CurrencyCode(44),
        call_codes: &[CallCode(1242)],
        region: RegionCode::NorthAmerica,
    },
    CountryRecord {
        code: CountryCode(50),
        name: "Bangladesh",
        alpha2: "BD",
        alpha3: "BGD",
        fips: "BG",
        ioc: "BAN",
        fifa: "BGD",
        capital: "Dhaka",
        currency: CurrencyCode(50),
        call_codes: &[CallCode(880)],
        region: RegionCode::Asia,
    },
    CountryRecord {
        code: CountryCode(52),
        name: "Barbados",
        alpha2: "BB",
        alpha3: "BRB",
        fips: "BB",
        ioc: "BAR",
        fifa: "BRB",
        capital: "Bridgetown",
        currency: CurrencyCode(52),
        call_codes: &[CallCode(1246)],
        region: RegionCode::NorthAmerica,
    },
    CountryRecord {
        code: CountryCode(48),
        name: "Bahrain",
        alpha2: "BH",
        alpha3: "BHR",
        fips: "BA",
        ioc: "BRN",
        fifa: "BHR",
        capital: "Manama",
        currency: CurrencyCode(48),
        call_codes: &[CallCode(973)],
        region: RegionCode::Asia,
    },
    CountryRecord {
        code: CountryCode(112),
        name: "Belarus",
        alpha2: "BY",
        alpha3: "BLR",
        fips: "BO",
        ioc: "BLR",
        fifa: "BLR",
        capital: "Minsk",
        currency: CurrencyCode(933),
        call_codes: &[CallCode(375)],
        region: RegionCode::Europe,
    },
    CountryRecord {
        code: CountryCode(84),
        name: "Belize",
        alpha2: "BZ",
        alpha3: "BLZ",
        fips: "BH",
        ioc: "BIZ",
        fifa: "BLZ",
        capital: "Belmopan",
        currency: CurrencyCode(84),
        call_codes: &[CallCode(501)],
        region: RegionCode::NorthAmerica,
    },
    CountryRecord {
        code: CountryCode(56),
        name: "Belgium",
        alpha2: "BE",
        alpha3: "BEL",
        fips: "BE",
        ioc: "BEL",
        fifa: "BEL",
        capital: "Brussels",
        currency: CurrencyCode(978),
        call_codes: &[CallCode(32)],
        region: RegionCode::Europe,
    },
    CountryRecord {
        code: CountryCode(204),
        name: "Benin",
        alpha2: "BJ",
        alpha3: "BEN",
        fips: "BN",
        ioc: "BEN",
        fifa: "BEN",
        capital: "Porto-Novo",
        currency: CurrencyCode(952),
        call_codes: &[CallCode(229)],
        region: RegionCode::Africa,
    },
    CountryRecord {
        code: CountryCode(60),
        name: "Bermuda",
        alpha2: "BM",
        alpha3: "BMU",
        fips: "BD",
        ioc: "BER",
        fifa: "BMU",
        capital: "Hamilton",
        currency: CurrencyCode(60),
        call_codes: &[CallCode(1441)],
        region: RegionCode::NorthAmerica,
    },
    CountryRecord {
        code: CountryCode(100),
        name: "Bulgaria",
        alpha2: "BG",
        alpha3: "BGR",
        fips: "BU",
        ioc: "BUL",
        fifa: "BGR",
        capital: "Sofia",
        currency: CurrencyCode(975),
        call_codes: &[CallCode(359)],
        region: RegionCode::Europe,
    },
    CountryRecord {
        code: CountryCode(68),
        name: "Bolivia",
        alpha2: "BO",
        alpha3: "BOL",
        fips: "BL",
        ioc: "BOL",
        fifa: "BOL",
        capital: "Sucre",
        currency: CurrencyCode(68),
        call_codes: &[CallCode(591)],
        region: RegionCode::SouthAmerica,
    },
    CountryRecord {
        code: CountryCode(70),
        name: "Bosnia and Herzegovina",
        alpha2: "BA",
        alpha3: "BIH",
        fips: "BK",
        ioc: "BIH",
        fifa: "BIH",
        capital: "Sarajevo",
        currency: CurrencyCode(977),
        call_codes: &[CallCode(387)],
        region: RegionCode::Europe,
    },
    CountryRecord {
        code: CountryCode(72),
        name: "Botswana",
        alpha2: "BW",
        alpha3: "BWA",
        fips: "BC",
        ioc: "BOT",
        fifa: "BWA",
        capital: "Gaborone",
        currency: CurrencyCode(72),
        call_codes: &[CallCode(267)],
        region: RegionCode::Africa,
    },
    CountryRecord {
        code: CountryCode(76),
        name: "Brazil",
        alpha2: "BR",
        alpha3: "BRA",
        fips: "BR",
        ioc: "BRA",
        fifa: "BRA",
        capital: "Brasilia",
        currency: CurrencyCode(986),
        call_codes: &[CallCode(55)],
        region: RegionCode::SouthAmerica,
    },
    CountryRecord {
        code: CountryCode(86),
        name: "British Indian Ocean Territory",
        alpha2: "IO",
        alpha3: "IOT",
        fips: "IO",
        ioc: "IOT",
        fifa: "IOT",
        capital: "Diego Garcia",
        currency: CurrencyCode(840),
        call_codes: &[CallCode(246)],
        region: RegionCode::Asia,
    },
    CountryRecord {
        code: CountryCode(96),
        name: "Brunei Darussalam",
        alpha2: "BN",
        alpha3: "BRN",
        fips: "BX",
        ioc: "BRU",
        fifa: "BRN",
        capital: "Bandar Seri Begawan",
        currency: CurrencyCode(96),
        call_codes: &[CallCode(673)],
        region: RegionCode::Asia,
    },
    CountryRecord {
        code: CountryCode(854),
        name: "Burkina Faso",
        alpha2: "BF",
        alpha3: "BFA",
        fips: "UV",
        ioc: "BUR",
        fifa: "BFA",
        capital: "Ouagadougou",
        currency: CurrencyCode(952),
        call_codes: &[CallCode(226)],
        region: RegionCode::Africa,
    },
    CountryRecord {
        code: CountryCode(108),
        name: "Burundi",
        alpha2: "BI",
        alpha3: "BDI",
        fips: "BY",
        ioc: "BDI",
        fifa: "BDI",
        capital: "Gitega",
        currency: CurrencyCode(108),
        call_codes: &[CallCode(257)],
        region: RegionCode::Africa,
    },
    CountryRecord {
        code: CountryCode(64),
        name: "Bhutan",
        alpha2: "BT",
        alpha3: "BTN",
        fips: "BT",
        ioc: "BHU",
        fifa: "BTN",
        capital: "Thimphu",
        currency: CurrencyCode(64),
        call_codes: &[CallCode(975)],
        region: RegionCode::Asia,
    },
    CountryRecord {
        code: CountryCode(548),
        name: "Vanuatu",
        alpha2: "VU",
        alpha3: "VUT",
        fips: "NH",
        ioc: "VAN",
        fifa: "VUT",
        capital: "Port Vila",
        currency: CurrencyCode(548),
        call_codes: &[CallCode(678)],
        region: RegionCode::Oceania,
    },
    CountryRecord {
        code: CountryCode(336),
        name: "Holy See (Vatican City State)",
        alpha2: "VA",
        alpha3: "VAT",
        fips: "VT",
        ioc: "VAT",
        fifa: "VAT",
        capital: "Vatican City",
        currency: CurrencyCode(978),
        call_codes: &[CallCode(3906698)],
        region: RegionCode::Europe,
    },
    CountryRecord {
        code: CountryCode(826),
        name: "United Kingdom",
        alpha2: "GB",
        alpha3: "GBR",
        fips: "UK",
        ioc: "GBR",
        fifa: "ENG",
        capital: "London",
        currency: CurrencyCode(826),
        call_codes: &[CallCode(44)],
        region: RegionCode::Europe,
    },
    CountryRecord {
        code: CountryCode(348),
        name: "Hungary",
        alpha2: "HU",
        alpha3: "HUN",
        fips: "HU",
        ioc: "HUN",
        fifa: "HUN",
        capital: "Budapest",
        currency: CurrencyCode(348),
        call_codes: &[CallCode(36)],
        region: RegionCode::Europe,
    },
    CountryRecord {
        code: CountryCode(862),
        name: "Venezuela",
        alpha2: "VE",
        alpha3: "VEN",
        fips: "VE",
        ioc: "VEN",
        fifa: "VEN",
        capital: "Caracas",
        currency: CurrencyCode(928),
        call_codes: &[CallCode(58)],
        region: RegionCode::SouthAmerica,
    },
    CountryRecord {
        code: CountryCode(92),
        name: "Virgin Islands British",
        alpha2: "VG",
        alpha3: "VGB",
        fips: "VI",
        ioc: "IVB",
        fifa: "VGB",
        capital: "Road Town",
        currency: CurrencyCode(840),
        call_codes: &[CallCode(1284)],
        region: RegionCode::NorthAmerica,
    },
    CountryRecord {
        code: CountryCode(850),
        name: "Virgin Islands US",
        alpha2: "VI",
        alpha3: "VIR",
        fips: "VQ",
        ioc: "ISV",
        fifa: "VIR",
        capital: "Charlotte Amalie",
        currency: CurrencyCode(840),
        call_codes: &[CallCode(1340)],
        region: RegionCode::NorthAmerica,
    },
    CountryRecord {
        code: CountryCode(626),
        name: "Timor-Leste (East Timor)",
        alpha2: "TL",
        alpha3: "TLS",
        fips: "TT",
        ioc: "TLS",
        fifa: "TLS",
        capital: "Dili",
        currency: CurrencyCode(840),
        call_codes: &[CallCode(670)],
        region: RegionCode::Asia,
    },
    CountryRecord {
        code: CountryCode(704),
        name: "Vietnam",
        alpha2: "VN",
        alpha3: "VNM",
        fips: "VM",
        ioc: "VIE",
        fifa: "VIE",
        capital: "Hanoi",
        currency: CurrencyCode(704),
        call_codes: &[CallCode(84)],
        region: RegionCode::Asia,
    },
    CountryRecord {
        code: CountryCode(266),
        name: "Gabon",
        alpha2: "GA",
        alpha3: "GAB",
        fips: "GB",
        ioc: "GAB",
        fifa: "GAB",
        capital: "Libreville",
        currency: CurrencyCode(950),
        call_codes: &[CallCode(241)],
        region: RegionCode::Africa,
    },
    CountryRecord {
        code: CountryCode(332),
        name: "Haiti",
        alpha2: "HT",
        alpha3: "HTI",
        fips: "GA",
        ioc: "HAI",
        fifa: "HTI",
        capital: "Port-au-Prince",
        currency: CurrencyCode(332),
        call_codes: &[CallCode(509)],
        region: RegionCode::NorthAmerica,
    },
    CountryRecord {
        code: CountryCode(328),
        name: "Guyana",
        alpha2: "GY",
        alpha3: "GUY",
        fips: "GY",
        ioc: "GUY",
        fifa: "GUY",
        capital: "Georgetown",
        currency: CurrencyCode(328),
        call_codes: &[CallCode(592)],
        region: RegionCode::SouthAmerica,
    },
    CountryRecord {
        code: CountryCode(270),
        name: "Gambia",
        alpha2: "GM",
        alpha3: "GMB",
        fips: "GA",
        ioc: "GAM",
        fifa: "GMB",
        capital: "Banjul",
        currency: CurrencyCode(270),
        call_codes: &[CallCode(220)],
        region: RegionCode::Africa,
    },
    CountryRecord {
        code: CountryCode(288),
        name: "Ghana",
        alpha2: "GH",
        alpha3: "GHA",
        fips: "GH",
        ioc: "GHA",
        fifa: "GHA",
        capital: "Accra",
        currency: CurrencyCode(936),
        call_codes: &[CallCode(233)],
        region: RegionCode::Africa,
    },
    CountryRecord {
        code: CountryCode(312),
        name: "Guadeloupe",
        alpha2: "GP",
        alpha3: "GLP",
        fips: "GP",
        ioc: "GLP",
        fifa: "GLP",
        capital: "Basse-Terre",
        currency: CurrencyCode(978),
        call_codes: &[CallCode(590)],
        region: RegionCode::NorthAmerica,
    },
    CountryRecord {
        code: CountryCode(320),
        name: "Guatemala",
        alpha2: "GT",
        alpha3: "GTM",
        fips: "GT",
        ioc: "GUA",
        fifa: "GTM",
        capital: "Guatemala City",
        currency: CurrencyCode(320),
        call_codes: &[CallCode(502)],
        region: RegionCode::NorthAmerica,
    },
    CountryRecord {
        code: CountryCode(324),
        name: "Guinea",
        alpha2: "GN",
        alpha3: "GIN",
        fips: "GV",
        ioc: "GUI",
        fifa: "GIN",
        capital: "Conakry",
        currency: CurrencyCode(324),
        call_codes: &[CallCode(224)],
        region: RegionCode::Africa,
    },
    CountryRecord {
        code: CountryCode(624),
        name: "Guinea-Bissau",
        alpha2: "GW",
        alpha3: "GNB",
        fips: "PU",
        ioc: "GBS",
        fifa: "GNB",
        capital: "Bissau",
        currency: CurrencyCode(952),
        call_codes: &[CallCode(245)],
        region: RegionCode::Africa,
    },
    CountryRecord {
        code: CountryCode(276),
        name: "Germany",
        alpha2: "DE",
        alpha3: "DEU",
        fips: "GM",
        ioc: "GER",
        fifa: "GER",
        capital: "Berlin",
        currency: CurrencyCode(978),
        call_codes: &[CallCode(49)],
        region: RegionCode::Europe,
    },
    CountryRecord {
        code: CountryCode(292),
        name: "Gibraltar",
        alpha2: "GI",
        alpha3: "GIB",
        fips: "GI",
        ioc: "GIB",
        fifa: "GIB",
        capital: "Gibraltar",
        currency: CurrencyCode(292),
        call_codes: &[CallCode(350)],
        region: RegionCode::Europe,
    },
    CountryRecord {
        code: CountryCode(340),
        name: "Honduras",
        alpha2: "HN",
        alpha3: "HND",
        fips: "HO",
        ioc: "HON",
        fifa: "HND",
        capital: "Tegucigalpa",
        currency: CurrencyCode(340),
        call_codes: &[CallCode(504)],
        region: RegionCode::NorthAmerica,
    },
    CountryRecord {
        code: CountryCode(344),
        name: "Hong Kong (Special Administrative Region of China)",
        alpha2: "HK",
        alpha3: "HKG",
        fips: "HK",
        ioc: "HKG",
        fifa: "HKG",
        capital: "Hong Kong",
        currency: CurrencyCode(344),
        call_codes: &[CallCode(852)],
        region: RegionCode::Asia,
    },
    CountryRecord {
        code: CountryCode(308),
        name: "Grenada",
        alpha2: "GD",
        alpha3: "GRD",
        fips: "GJ",
        ioc: "GRN",
        fifa: "GRD",
        capital: "Saint George's",
        currency: CurrencyCode(951),
        call_codes: &[CallCode(1473)],
        region: RegionCode::NorthAmerica,
    },
    CountryRecord {
        code: CountryCode(304),
        name: "Greenland",
        alpha2: "GL",
        alpha3: "GRL",
        fips: "GL",
        ioc: "GRL",
        fifa: "GRL",
        capital: "Nuuk",
        currency: CurrencyCode(208),
        call_codes: &[CallCode(299)],
        region: RegionCode::NorthAmerica,
    },
    CountryRecord {
        code: CountryCode(300),
        name: "Greece",
        alpha2: "GR",
        alpha3: "GRC",
        fips: "GR",
        ioc: "GRE",
        fifa: "GRC",
        capital: "Athens",
        currency: CurrencyCode(978),
        call_codes: &[CallCode(30)],
        region: RegionCode::Europe,
    },
    CountryRecord {
        code: CountryCode(268),
        name: "Georgia",
        alpha2: "GE",
        alpha3: "GEO",
        fips: "GG",
        ioc: "GEO",
        fifa: "GEO",
        capital: "Tbilisi",
        currency: CurrencyCode(981),
        call_codes: &[CallCode(995)],
        region: RegionCode::Asia,
    },
    CountryRecord {
        code: CountryCode(316),
        name: "Guam",
        alpha2: "GU",
        alpha3: "GUM",
        fips: "GQ",
        ioc: "GUM",
        fifa: "GUM",
        capital: "Hagatna",
        currency: CurrencyCode(840),
        call_codes: &[CallCode(1671)],
        region: RegionCode::Oceania,
    },
    CountryRecord {
        code: CountryCode(208),
        name: "Denmark",
        alpha2: "DK",
        alpha3: "DNK",
        fips: "DA",
        ioc: "DEN",
        fifa: "DNK",
        capital: "Copenhagen",
        currency: CurrencyCode(208),
        call_codes: &[CallCode(45)],
        region: RegionCode::Europe,
    },
    CountryRecord {
        code: CountryCode(180),
        name: "Democratic Republic of the Congo",
        alpha2: "CD",
        alpha3: "COD",
        fips: "CG",
        ioc: "COD",
        fifa: "COD",
        capital: "Kinshasa",
        currency: CurrencyCode(976),
        call_codes: &[CallCode(243)],
        region: RegionCode::Africa,
    },
    CountryRecord {
        code: CountryCode(262),
        name: "Djibouti",
        alpha2: "DJ",
        alpha3: "DJI",
        fips: "DJ",
        ioc: "DJI",
        fifa: "DJI",
        capital: "Djibouti",
        currency: CurrencyCode(262),
        call_codes: &[CallCode(253)],
        region: RegionCode::Africa,
    },
    CountryRecord {
        code: CountryCode(212),
        name: "Dominica",
        alpha2: "DM",
        alpha3: "DMA",
        fips: "DO",
        ioc: "DMA",
        fifa: "DMA",
        capital: "Roseau",
        currency: CurrencyCode(951),
        call_codes: &[CallCode(1767)],
        region: RegionCode::NorthAmerica,
    },
    CountryRecord {
        code: CountryCode(214),
        name: "Dominican Republic",
        alpha2: "DO",
        alpha3: "DOM",
        fips: "DR",
        ioc: "DOM",
        fifa: "DOM",
        capital: "Santo Domingo",
        currency: CurrencyCode(214),
        call_codes: &[CallCode(1809), CallCode(1829), CallCode(1849)],
        region: RegionCode::NorthAmerica,
    },
    CountryRecord {
        code: CountryCode(818),
        name: "Egypt",
        alpha2: "EG",
        alpha3: "EGY",
        fips: "EG",
        ioc: "EGY",
        fifa: "EGY",
        capital: "Cairo",
        currency: CurrencyCode(818),
        call_codes: &[CallCode(20)],
        region: RegionCode::Africa,
    },
    CountryRecord {
        code: CountryCode(894),
        name: "Zambia",
        alpha2: "ZM",
        alpha3: "ZMB",
        fips: "ZA",
        ioc: "ZAM",
        fifa: "ZMB",
        capital: "Lusaka",
        currency: CurrencyCode(967),
        call_codes: &[CallCode(260)],
        region: RegionCode::Africa,
    },
    CountryRecord {
        code: CountryCode(732),
        name: "Western Sahara",
        alpha2: "EH",
        alpha3: "ESH",
        fips: "WI",
        ioc: "ESH",
        fifa: "ESH",
        capital: "El Aaiun",
        currency: CurrencyCode(504),
        call_codes: &[CallCode(212)],
        region: RegionCode::Africa,
    },
    CountryRecord {
        code: CountryCode(716),
        name: "Zimbabwe",
        alpha2: "ZW",
        alpha3: "ZWE",
        fips: "ZI",
        ioc: "ZIM",
        fifa: "ZWE",
        capital: "Harare",
        currency: CurrencyCode(932),
        call_codes: &[CallCode(263)],
        region: RegionCode::Africa,
    },
    CountryRecord {
        code: CountryCode(376),
        name: "Israel",
        alpha2: "IL",
        alpha3: "ISR",
        fips: "IS",
        ioc: "ISR",
        fifa: "ISR",
        capital: "Jerusalem",
        currency: CurrencyCode(376),
        call_codes: &[CallCode(972)],
        region: RegionCode::Asia,
    },
    CountryRecord {
        code: CountryCode(356),
        name: "India",
        alpha2: "IN",
        alpha3: "IND",
        fips: "IN",
        ioc: "IND",
        fifa: "IND",
        capital: "New Delhi",
        currency: CurrencyCode(356),
        call_codes: &[CallCode(91)],
        region: RegionCode::Asia,
    },
    CountryRecord {
        code: CountryCode(360),
        name: "Indonesia",
        alpha2: "ID",
        alpha3: "IDN",
        fips: "ID",
        ioc: "INA",
        fifa: "IDN",
        capital: "Jakarta",
        currency: CurrencyCode(360),
        call_codes: &[CallCode(62)],
        region: RegionCode::Asia,
    },
    CountryRecord {
        code: CountryCode(400),
        name: "Jordan",
        alpha2: "JO",
        alpha3: "JOR",
        fips: "JO",
        ioc: "JOR",
        fifa: "JOR",
        capital: "Amman",
        currency: CurrencyCode(400),
        call_codes: &[CallCode(962)],
        region: RegionCode::Asia,
    },
    CountryRecord {
        code: CountryCode(368),
        name: "Iraq",
        alpha2: "IQ",
        alpha3: "IRQ",
        fips: "IZ",
        ioc: "IRQ",
        fifa: "IRQ",
        capital: "Baghdad",
        currency: CurrencyCode(368),
        call_codes: &[CallCode(964)],
        region: RegionCode::Asia,
    },
    CountryRecord {
        code: CountryCode(364),
        name: "Iran (Islamic Republic of)",
        alpha2: "IR",
        alpha3: "IRN",
        fips: "IR",
        ioc: "IRI",
        fifa: "IRN",
        capital: "Tehran",
        currency: CurrencyCode(364),
        call_codes: &[CallCode(98)],
        region: RegionCode::Asia,
    },
    CountryRecord {
        code: CountryCode(372),
        name: "Ireland",
        alpha2: "IE",
        alpha3: "IRL",
        fips: "EI",
        ioc: "IRL",
        fifa: "IRL",
        capital: "Dublin",
        currency: CurrencyCode(978),
        call_codes: &[CallCode(353)],
        region: RegionCode::Europe,
    },
    CountryRecord {
        code: CountryCode(352),
        name: "Iceland",
        alpha2: "IS",
        alpha3: "ISL",
        fips: "IC",
        ioc: "ISL",
        fifa: "ISL",
        capital: "Reykjavik",
        currency: CurrencyCode(352),
        call_codes: &[CallCode(354)],
        region: RegionCode::Europe,
    },
    CountryRecord {
        code: CountryCode(724),
        name: "Spain",
        alpha2: "ES",
        alpha3: "ESP",
        fips: "SP",
        ioc: "ESP",
        fifa: "ESP",
        capital: "Madrid",
        currency: CurrencyCode(978),
        call_codes: &[CallCode(34)],
        region: RegionCode::Europe,
    },
    CountryRecord {
        code: CountryCode(380),
        name: "Italy",
        alpha2: "IT",
        alpha3: "ITA",
        fips: "IT",
        ioc: "ITA",
        fifa: "ITA",
        capital: "Rome",
        currency: CurrencyCode(978),
        call_codes: &[CallCode(39)],
        region: RegionCode::Europe,
    },
    CountryRecord {
        code: CountryCode(887),
        name: "Yemen",
        alpha2: "YE",
        alpha3: "YEM",
        fips: "YM",
        ioc: "YEM",
        fifa: "YEM",
        capital: "Sana'a",
        currency: CurrencyCode(886),
        call_codes: &[CallCode(967)],
        region: RegionCode::Asia,
    },
    CountryRecord {
        code: CountryCode(398),
        name: "Kazakhstan",
        alpha2: "KZ",
        alpha3: "KAZ",
        fips: "KZ",
        ioc: "KAZ",
        fifa: "KAZ",
        capital: "Astana",
        currency: CurrencyCode(398),
        call_codes: &[CallCode(7)],
        region: RegionCode::Asia,
    },
    CountryRecord {
        code: CountryCode(136),
        name: "Cayman Islands",
        alpha2: "KY",
        alpha3: "CYM",
        fips: "CJ",
        ioc: "CAY",
        fifa: "CYM",
        capital: "George Town",
        currency: CurrencyCode(136),
        call_codes: &[CallCode(1345)],
        region: RegionCode::NorthAmerica,
    },
    CountryRecord {
        code: CountryCode(116),
        name: "Cambodia",
        alpha2: "KH",
        alpha3: "KHM",
        fips: "CB",
        ioc: "CAM",
        fifa: "KHM",
        capital: "Phnom Penh",
        currency: CurrencyCode(116),
        call_codes: &[CallCode(855)],
        region: RegionCode::Asia,
    },
    CountryRecord {
        code: CountryCode(120),
        name: "Cameroon",
        alpha2: "CM",
        alpha3: "CMR",
        fips: "CM",
        ioc: "CMR",
        fifa: "CMR",
        capital: "Yaounde",
        currency: CurrencyCode(950),
        call_codes: &[CallCode(237)],
        region: RegionCode::Africa,
    },
    CountryRecord {
        code: CountryCode(124),
        name: "Canada",
        alpha2: "CA",
        alpha3: "CAN",
        fips: "CA",
        ioc: "CAN",
        fifa: "CAN",
        capital: "Ottawa",
        currency: CurrencyCode(124),
        call_codes: &[CallCode(1)],
        region: RegionCode::NorthAmerica,
    },
    CountryRecord {
        code: CountryCode(634),
        name: "Qatar",
        alpha2: "QA",
        alpha3: "QAT",
        fips: "QA",
        ioc: "QAT",
        fifa: "QAT",
        capital: "Doha",
        currency: CurrencyCode(634),
        call_codes: &[CallCode(974)],
        region: RegionCode::Asia,
    },
    CountryRecord {
        code: CountryCode(404),
        name: "Kenya",
        alpha2: "KE",
        alpha3: "KEN",
        fips: "KE",
        ioc: "KEN",
        fifa: "KEN",
        capital: "Nairobi",
        currency: CurrencyCode(404),
        call_codes: &[CallCode(254)],
        region: RegionCode::Africa,
    },
    CountryRecord {
        code: CountryCode(196),
        name: "Cyprus",
        alpha2: "CY",
        alpha3: "CYP",
        fips: "CY",
        ioc: "CYP",
        fifa: "CYP",
        capital: "Nicosia",
        currency: CurrencyCode(978),
        call_codes: &[CallCode(357)],
        region: RegionCode::Asia,
    },
    CountryRecord {
        code: CountryCode(296),
        name: "Kiribati",
        alpha2: "KI",
        alpha3: "KIR",
        fips: "KR",
        ioc: "KIR",
        fifa: "KIR",
        capital: "Tarawa",
        currency: CurrencyCode(36),
        call_codes: &[CallCode(686)],
        region: RegionCode::Oceania,
    },
    CountryRecord {
        code: CountryCode(156),
        name: "China",
        alpha2: "CN",
        alpha3: "CHN",
        fips: "CH",
        ioc: "CHN",
        fifa: "CHN",
        capital: "Beijing",
        currency: CurrencyCode(156),
        call_codes: &[CallCode(86)],
        region: RegionCode::Asia,
    },
    CountryRecord {
        code: CountryCode(166),
        name: "Cocos (Keeling) Islands",
        alpha2: "CC",
        alpha3: "CCK",
        fips: "CK",
        ioc: "CCK",
        fifa: "CCK",
        capital: "West Island",
        currency: CurrencyCode(36),
        call_codes: &[CallCode(672), CallCode(6189162)],
        region: RegionCode::Asia,
    },
    CountryRecord {
        code: CountryCode(170),
        name: "Colombia",
        alpha2: "CO",
        alpha3: "COL",
        fips: "CO",
        ioc: "COL",
        fifa: "COL",
        capital: "Bogota",
        currency: CurrencyCode(170),
        call_codes: &[CallCode(57)],
        region: RegionCode::SouthAmerica,
    },
    CountryRecord {
        code: CountryCode(174),
        name: "Comoros",
        alpha2: "KM",
        alpha3: "COM",
        fips: "CN",
        ioc: "COM",
        fifa: "COM",
        capital: "Moroni",
        currency: CurrencyCode(174),
        call_codes: &[CallCode(269)],
        region: RegionCode::Africa,
    },
    CountryRecord {
        code: CountryCode(178),
        name: "Congo",
        alpha2: "CG",
        alpha3: "COG",
        fips: "CF",
        ioc: "CGO",
        fifa: "COG",
        capital: "Brazzaville",
        currency: CurrencyCode(950),
        call_codes: &[CallCode(242)],
        region: RegionCode::Africa,
    },
    CountryRecord {
        code: CountryCode(408),
        name: "Democratic People's Republic of Korea",
        alpha2: "KP",
        alpha3: "PRK",
        fips: "KN",
        ioc: "PRK",
        fifa: "PRK",
        capital: "Pyongyang",
        currency: CurrencyCode(408),
        call_codes: &[CallCode(850)],
        region: RegionCode::Asia,
    },
    CountryRecord {
        code: CountryCode(410),
        name: "Republic of Korea",
        alpha2: "KR",
        alpha3: "KOR",
        fips: "KS",
        ioc: "KOR",
        fifa: "KOR",
        capital: "Seoul",
        currency: CurrencyCode(410),
        call_codes: &[CallCode(82)],
        region: RegionCode::Asia,
    },
    CountryRecord {
        code: CountryCode(188),
        name: "Costa Rica",
        alpha2: "CR",
        alpha3: "CRI",
        fips: "CS",
        ioc: "CRC",
        fifa: "CRI",
        capital: "San Jose",
        currency: CurrencyCode(188),
        call_codes: &[CallCode(506)],
        region: RegionCode::NorthAmerica,
    },
    CountryRecord {
        code: CountryCode(384),
        name: "Cote d'Ivoire",
        alpha2: "CI",
        alpha3: "CIV",
        fips: "IV",
        ioc: "CIV",
        fifa: "CIV",
        capital: "Yamoussoukro",
        currency: CurrencyCode(952),
        call_codes: &[CallCode(225)],
        region: RegionCode::Africa,
    },
    CountryRecord {
        code: CountryCode(192),
        name: "Cuba",
        alpha2: "CU",
        alpha3: "CUB",
        fips: "CU",
        ioc: "CUB",
        fifa: "CUB",
        capital: "Havana",
        currency: CurrencyCode(931),
        call_codes: &[CallCode(53)],
        region: RegionCode::NorthAmerica,
    },
    CountryRecord {
        code: CountryCode(414),
        name: "Kuwait",
        alpha2: "KW",
        alpha3: "KWT",
        fips: "KU",
        ioc: "KUW",
        fifa: "KWT",
        capital: "Kuwait City",
        currency: CurrencyCode(414),
        call_codes: &[CallCode(965)],
        region: RegionCode::Asia,
    },
    CountryRecord {
        code: CountryCode(417),
        name: "Kyrgyzstan",
        alpha2: "KG",
        alpha3: "KGZ",
        fips: "KG",
        ioc: "KGZ",
        fifa: "KGZ",
        capital: "Bishkek",
        currency: CurrencyCode(417),
        call_codes: &[CallCode(996)],
        region: RegionCode::Asia,
    },
    CountryRecord {
        code: CountryCode(418),
        name: "Lao People's Democratic Republic",
        alpha2: "LA",
        alpha3: "LAO",
        fips: "LA",
        ioc: "LAO",
        fifa: "LAO",
        capital: "Vientiane",
        currency: CurrencyCode(418),
        call_codes: &[CallCode(856)],
        region: RegionCode::Asia,
    },
    CountryRecord {
        code: CountryCode(428),
        name: "Latvia",
        alpha2: "LV",
        alpha3: "LVA",
        fips: "LG",
        ioc: "LAT",
        fifa: "LVA",
        capital: "Riga",
        currency: CurrencyCode(978),
        call_codes: &[CallCode(371)],
        region: RegionCode::Europe,
    },
    CountryRecord {
        code: CountryCode(426),
        name: "Lesotho",
        alpha2: "LS",
        alpha3: "LSO",
        fips: "LT",
        ioc: "LES",
        fifa: "LSO",
        capital: "Maseru",
        currency: CurrencyCode(426),
        call_codes: &[CallCode(266)],
        region: RegionCode::Africa,
    },
    CountryRecord {
        code: CountryCode(430),
        name: "Liberia",
        alpha2: "LR",
        alpha3: "LBR",
        fips: "LI",
        ioc: "LBR",
        fifa: "LBR",
        capital: "Monrovia",
        currency: CurrencyCode(430),
        call_codes: &[CallCode(231)],
        region: RegionCode::Africa,
    },
    CountryRecord {
        code: CountryCode(422),
        name: "Lebanon",
        alpha2: "LB",
        alpha3: "LBN",
        fips: "LE",
        ioc: "LIB",
        fifa: "LBN",
        capital: "Beirut",
        currency: CurrencyCode(422),
        call_codes: &[CallCode(961)],
        region: RegionCode::Asia,
    },
    CountryRecord {
        code: CountryCode(434),
        name: "Libyan Arab Jamahiriya",
        alpha2: "LY",
        alpha3: "LBY",
        fips: "LY",
        ioc: "LBA",
        fifa: "LBY",
        capital: "Tripoli",
        currency: CurrencyCode(434),
        call_codes: &[CallCode(218)],
        region: RegionCode::Africa,
    },
    CountryRecord {
        code: CountryCode(440),
        name: "Lithuania",
        alpha2: "LT",
        alpha3: "LTU",
        fips: "LH",
        ioc: "LTU",
        fifa: "LTU",
        capital: "Vilnius",
        currency: CurrencyCode(978),
        call_codes: &[CallCode(370)],
        region: RegionCode::Europe,
    },
    CountryRecord {
        code: CountryCode(438),
        name: "Liechtenstein",
        alpha2: "LI",
        alpha3: "LIE",
        fips: "LS",
        ioc: "LIE",
        fifa: "LIE",
        capital: "Vaduz",
        currency: CurrencyCode(756),
        call_codes: &[CallCode(423)],
        region: RegionCode::Europe,
    },
    CountryRecord {
        code: CountryCode(442),
        name: "Luxembourg",
        alpha2: "LU",
        alpha3: "LUX",
        fips: "LU",
        ioc: "LUX",
        fifa: "LUX",
        capital: "Luxembourg",
        currency: CurrencyCode(978),
        call_codes: &[CallCode(352)],
        region: RegionCode::Europe,
    },
    CountryRecord {
        code: CountryCode(480),
        name: "Mauritius",
        alpha2: "MU",
        alpha3: "MUS",
        fips: "MP",
        ioc: "MRI",
        fifa: "MUS",
        capital: "Port Louis",
        currency: CurrencyCode(480),
        call_codes: &[CallCode(230)],
        region: RegionCode::Africa,
    },
    CountryRecord {
        code: CountryCode(478),
        name: "Mauritania",
        alpha2: "MR",
        alpha3: "MRT",
        fips: "MR",
        ioc: "MTN",
        fifa: "MRT",
        capital: "Nouakchott",
        currency: CurrencyCode(929),
        call_codes: &[CallCode(222)],
        region: RegionCode::Africa,
    },
    CountryRecord {
        code: CountryCode(450),
        name: "Madagascar",
        alpha2: "MG",
        alpha3: "MDG",
        fips: "MA",
        ioc: "MAD",
        fifa: "MDG",
        capital: "Antananarivo",
        currency: CurrencyCode(969),
        call_codes: &[CallCode(261)],
        region: RegionCode::Africa,
    },
    CountryRecord {
        code: CountryCode(175),
        name: "Mayotte",
        alpha2: "YT",
        alpha3: "MYT",
        fips: "MF",
        ioc: "MYT",
        fifa: "MYT",
        capital: "Mamoudzou",
        currency: CurrencyCode(978),
        call_codes: &[],
        region: RegionCode::Africa,
    },
    CountryRecord {
        code: CountryCode(446),
        name: "Macau (Special Administrative Region of China)",
        alpha2: "MO",
        alpha3: "MAC",
        fips: "MC",
        ioc: "MAC",
        fifa: "MAC",
        capital: "Macao",
        currency: CurrencyCode(446),
        call_codes: &[CallCode(853)],
        region: RegionCode::Asia,
    },
    CountryRecord {
        code: CountryCode(807),
        name: "North Macedonia (Republic of North Macedonia)",
        alpha2: "MK",
        alpha3: "MKD",
        fips: "MK",
        ioc: "MKD",
        fifa: "MKD",
        capital: "Skopje",
        currency: CurrencyCode(807),
        call_codes: &[CallCode(389)],
        region: RegionCode::Europe,
    },
    CountryRecord {
        code: CountryCode(454),
        name: "Malawi",
        alpha2: "MW",
        alpha3: "MWI",
        fips: "MI",
        ioc: "MAW",
        fifa: "MWI",
        capital: "Lilongwe",
        currency: CurrencyCode(454),
        call_codes: &[CallCode(265)],
        region: RegionCode::Africa,
    },
    CountryRecord {
        code: CountryCode(458),
        name: "Malaysia",
        alpha2: "MY",
        alpha3: "MYS",
        fips: "MY",
        ioc: "MAS",
        fifa: "MYS",
        capital: "Kuala Lumpur",
        currency: CurrencyCode(458),
        call_codes: &[CallCode(60)],
        region: RegionCode::Asia,
    },
    CountryRecord {
        code: CountryCode(466),
        name: "Mali",
        alpha2: "ML",
        alpha3: "MLI",
        fips: "ML",
        ioc: "MLI",
        fifa: "MLI",
        capital: "Bamako",
        currency: CurrencyCode(952),
        call_codes: &[CallCode(223)],
        region: RegionCode::Africa,
    },
    CountryRecord {
        code: CountryCode(462),
        name: "Maldives",
        alpha2: "MV",
        alpha3: "MDV",
        fips: "MV",
        ioc: "MDV",
        fifa: "MDV",
        capital: "Male",
        currency: CurrencyCode(462),
        call_codes: &[CallCode(960)],
        region: RegionCode::Asia,
    },
    CountryRecord {
        code: CountryCode(470),
        name: "Malta",
        alpha2: "MT",
        alpha3: "MLT",
        fips: "MT",
        ioc: "MLT",
        fifa: "MLT",
        capital: "Valletta",
        currency: CurrencyCode(978),
        call_codes: &[CallCode(356)],
        region: RegionCode::Europe,
    },
    CountryRecord {
        code: CountryCode(580),
        name: "Northern Mariana Islands",
        alpha2: "MP",
        alpha3: "MNP",
        fips: "CQ",
        ioc: "MNP",
        fifa: "MNP",
        capital: "Saipan",
        currency: CurrencyCode(840),
        call_codes: &[CallCode(1670)],
        region: RegionCode::Oceania,
    },
    CountryRecord {
        code: CountryCode(504),
        name: "Morocco",
        alpha2: "MA",
        alpha3: "MAR",
        fips: "MO",
        ioc: "MAR",
        fifa: "MAR",
        capital: "Rabat",
        currency: CurrencyCode(504),
        call_codes: &[CallCode(212)],
        region: RegionCode::Africa,
    },
    CountryRecord {
        code: CountryCode(474),
        name: "Martinique",
        alpha2: "MQ",
        alpha3: "MTQ",
        fips: "MB",
        ioc: "MTQ",
        fifa: "MTQ",
        capital: "Fort-de-France",
        currency: CurrencyCode(978),
        call_codes: &[CallCode(596)],
        region: RegionCode::NorthAmerica,
    },
    CountryRecord {
        code: CountryCode(584),
        name: "Marshall Islands",
        alpha2: "MH",
        alpha3: "MHL",
        fips: "RM",
        ioc: "MHL",
        fifa: "MHL",
        capital: "Majuro",
        currency: CurrencyCode(840),
        call_codes: &[CallCode(692)],
        region: RegionCode::Oceania,
    },
    CountryRecord {
        code: CountryCode(484),
        name: "Mexico",
        alpha2: "MX",
        alpha3: "MEX",
        fips: "MX",
        ioc: "MEX",
        fifa: "MEX",
        capital: "Mexico City",
        currency: CurrencyCode(484),
        call_codes: &[CallCode(52)],
        region: RegionCode::NorthAmerica,
    },
    CountryRecord {
        code: CountryCode(583),
        name: "Micronesia (Federated States of)",
        alpha2: "FM",
        alpha3: "FSM",
        fips: "FM",
        ioc: "FSM",
        fifa: "FSM",
        capital: "Palikir",
        currency: CurrencyCode(840),
        call_codes: &[CallCode(691)],
        region: RegionCode::Oceania,
    },
    CountryRecord {
        code: CountryCode(508),
        name: "Mozambique",
        alpha2: "MZ",
        alpha3: "MOZ",
        fips: "MZ",
        ioc: "MOZ",
        fifa: "MOZ",
        capital: "Maputo",
        currency: CurrencyCode(943),
        call_codes: &[CallCode(258)],
        region: RegionCode::Africa,
    },
    CountryRecord {
        code: CountryCode(498),
        name: "Moldova (Republic of)",
        alpha2: "MD",
        alpha3: "MDA",
        fips: "MD",
        ioc: "MDA",
        fifa: "MDA",
        capital: "Chisinau",
        currency: CurrencyCode(498),
        call_codes: &[CallCode(373)],
        region: RegionCode::Europe,
    },
    CountryRecord {
        code: CountryCode(492),
        name: "Monaco",
        alpha2: "MC",
        alpha3: "MCO",
        fips: "MN",
        ioc: "MON",
        fifa: "MCO",
        capital: "Monaco",
        currency: CurrencyCode(978),
        call_codes: &[CallCode(377)],
        region: RegionCode::Europe,
    },
    CountryRecord {
        code: CountryCode(496),
        name: "Mongolia",
        alpha2: "MN",
        alpha3: "MNG",
        fips: "MG",
        ioc: "MGL",
        fifa: "MNG",
        capital: "Ulaanbaatar",
        currency: CurrencyCode(496),
        call_codes: &[CallCode(976)],
        region: RegionCode::Asia,
    },
    CountryRecord {
        code: CountryCode(500),
        name: "Montserrat",
        alpha2: "MS",
        alpha3: "MSR",
        fips: "MH",
        ioc: "MSR",
        fifa: "MSR",
        capital: "Brades",
        currency: CurrencyCode(951),
        call_codes: &[CallCode(1664)],
        region: RegionCode::NorthAmerica,
    },
    CountryRecord {
        code: CountryCode(104),
        name: "Myanmar",
        alpha2: "MM",
        alpha3: "MMR",
        fips: "BM",
        ioc: "MYA",
        fifa: "MMR",
        capital: "Naypyidaw",
        currency: CurrencyCode(104),
        call_codes: &[CallCode(95)],
        region: RegionCode::Asia,
    },
    CountryRecord {
        code: CountryCode(516),
        name: "Namibia",
        alpha2: "NA",
        alpha3: "NAM",
        fips: "WA",
        ioc: "NAM",
        fifa: "NAM",
        capital: "Windhoek",
        currency: CurrencyCode(516),
        call_codes: &[CallCode(264)],
        region: RegionCode::Africa,
    },
    CountryRecord {
        code: CountryCode(520),
        name: "Nauru",
        alpha2: "NR",
        alpha3: "NRU",
        fips: "NR",
        ioc: "NRU",
        fifa: "NRU",
        capital: "Yaren",
        currency: CurrencyCode(36),
        call_codes: &[CallCode(674)],
        region: RegionCode::Oceania,
    },
    CountryRecord {
        code: CountryCode(524),
        name: "Nepal",
        alpha2: "NP",
        alpha3: "NPL",
        fips: "NP",
        ioc: "NEP",
        fifa: "NPL",
        capital: "Kathmandu",
        currency: CurrencyCode(524),
        call_codes: &[CallCode(977)],
        region: RegionCode::Asia,
    },
    CountryRecord {
        code: CountryCode(562),
        name: "Niger",
        alpha2: "NE",
        alpha3: "NER",
        fips: "NG",
        ioc: "NIG",
        fifa: "NER",
        capital: "Niamey",
        currency: CurrencyCode(952),
        call_codes: &[CallCode(227)],
        region: RegionCode::Africa,
    },
    CountryRecord {
        code: CountryCode(566),
        name: "Nigeria",
        alpha2: "NG",
        alpha3: "NGA",
        fips: "NI",
        ioc: "NGR",
        fifa: "NGA",
        capital: "Abuja",
        currency: CurrencyCode(566),
        call_codes: &[CallCode(234)],
        region: RegionCode::Africa,
    },
    CountryRecord {
        code: CountryCode(528),
        name: "Netherlands",
        alpha2: "NL",
        alpha3: "NLD",
        fips: "NL",
        ioc: "NED",
        fifa: "NED",
        capital: "Amsterdam",
        currency: CurrencyCode(978),
        call_codes: &[CallCode(31)],
        region: RegionCode::Europe,
    },
    CountryRecord {
        code: CountryCode(558),
        name: "Nicaragua",
        alpha2: "NI",
        alpha3: "NIC",
        fips: "NU",
        ioc: "NCA",
        fifa: "NIC",
        capital: "Managua",
        currency: CurrencyCode(558),
        call_codes: &[CallCode(505)],
        region: RegionCode::NorthAmerica,
    },
    CountryRecord {
        code: CountryCode(570),
        name: "Niue",
        alpha2: "NU",
        alpha3: "NIU",
        fips: "NE",
        ioc: "NIU",
        fifa: "NIU",
        capital: "Alofi",
        currency: CurrencyCode(554),
        call_codes: &[CallCode(683)],
        region: RegionCode::Oceania,
    },
    CountryRecord {
        code: CountryCode(554),
        name: "New Zealand",
        alpha2: "NZ",
        alpha3: "NZL",
        fips: "NZ",
        ioc: "NZL",
        fifa: "NZL",
        capital: "Wellington",
        currency: CurrencyCode(554),
        call_codes: &[CallCode(64)],
        region: RegionCode::Oceania,
    },
    CountryRecord {
        code: CountryCode(540),
        name: "New Caledonia",
        alpha2: "NC",
        alpha3: "NCL",
        fips: "NC",
        ioc: "NCL",
        fifa: "NCL",
        capital: "Noumea",
        currency: CurrencyCode(953),
        call_codes: &[CallCode(687)],
        region: RegionCode::Oceania,
    },
    CountryRecord {
        code: CountryCode(578),
        name: "Norway",
        alpha2: "NO",
        alpha3: "NOR",
        fips: "NO",
        ioc: "NOR",
        fifa: "NOR",
        capital: "Oslo",
        currency: CurrencyCode(578),
        call_codes: &[CallCode(47)],
        region: RegionCode::Europe,
    },
    CountryRecord {
        code: CountryCode(512),
        name: "Oman",
        alpha2: "OM",
        alpha3: "OMN",
        fips: "MU",
        ioc: "OMA",
        fifa: "OMN",
        capital: "Muscat",
        currency: CurrencyCode(512),
        call_codes: &[CallCode(968)],
        region: RegionCode::Asia,
    },
    CountryRecord {
        code: CountryCode(74),
        name: "Bouvet Island",
        alpha2: "BV",
        alpha3: "BVT",
        fips: "BV",
        ioc: "BVT",
        fifa: "BVT",
        capital: "",
        currency: CurrencyCode(578),
        call_codes: &[CallCode(47)],
        region: RegionCode::Antarctica,
    },
    CountryRecord {
        code: CountryCode(833),
        name: "Isle Of Man",
        alpha2: "IM",
        alpha3: "IMN",
        fips: "IM",
        ioc: "IMN",
        fifa: "IMN",
        capital: "Douglas",
        currency: CurrencyCode(826),
        call_codes: &[CallCode(441624)],
        region: RegionCode::Europe,
    },
    CountryRecord {
        code: CountryCode(574),
        name: "Norfolk Island",
        alpha2: "NF",
        alpha3: "NFK",
        fips: "NF",
        ioc: "NFK",
        fifa: "NFK",
        capital: "Kingston",
        currency: CurrencyCode(36),
        call_codes: &[CallCode(672)],
        region: RegionCode::Oceania,
    },
    CountryRecord {
        code: CountryCode(612),
        name: "Pitcairn",
        alpha2: "PN",
        alpha3: "PCN",
        fips: "PC",
        ioc: "PCN",
        fifa: "PCN",
        capital: "Adamstown",
        currency: CurrencyCode(554),
        call_codes: &[CallCode(64)],
        region: RegionCode::Oceania,
    },
    CountryRecord {
        code: CountryCode(162),
        name: "Christmas Island",
        alpha2: "CX",
        alpha3: "CXR",
        fips: "KT",
        ioc: "CXR",
        fifa: "CXR",
        capital: "Flying Fish Cove",
        currency: CurrencyCode(36),
        call_codes: &[CallCode(6189164)],
        region: RegionCode::Asia,
    },
    CountryRecord {
        code: CountryCode(654),
        name: "Saint Helena",
        alpha2: "SH",
        alpha3: "SHN",
        fips: "SH",
        ioc: "SHN",
        fifa: "SHN",
        capital: "Jamestown",
        currency: CurrencyCode(654),
        call_codes: &[CallCode(290)],
        region: RegionCode::Africa,
    },
    CountryRecord {
        code: CountryCode(876),
        name: "Wallis and Futuna Islands",
        alpha2: "WF",
        alpha3: "WLF",
        fips: "WF",
        ioc: "WLF",
        fifa: "WLF",
        capital: "Mata-Utu",
        currency: CurrencyCode(953),
        call_codes: &[CallCode(681)],
        region: RegionCode::Oceania,
    },
    CountryRecord {
        code: CountryCode(334),
        name: "Heard Island and McDonald Islands",
        alpha2: "HM",
        alpha3: "HMD",
        fips: "HM",
        ioc: "HMD",
        fifa: "HMD",
        capital: "",
        currency: CurrencyCode(36),
        call_codes: &[CallCode(61)],
        region: RegionCode::Antarctica,
    },
    CountryRecord {
        code: CountryCode(132),
        name: "Cape Verde",
        alpha2: "CV",
        alpha3: "CPV",
        fips: "CV",
        ioc: "CPV",
        fifa: "CPV",
        capital: "Praia",
        currency: CurrencyCode(132),
        call_codes: &[CallCode(238)],
        region: RegionCode::Africa,
    },
    CountryRecord {
        code: CountryCode(184),
        name: "Cook Islands",
        alpha2: "CK",
        alpha3: "COK",
        fips: "CW",
        ioc: "COK",
        fifa: "COK",
        capital: "Avarua",
        currency: CurrencyCode(554),
        call_codes: &[CallCode(682)],
        region: RegionCode::Oceania,
    },
    CountryRecord {
        code: CountryCode(882),
        name: "Samoa",
        alpha2: "WS",
        alpha3: "WSM",
        fips: "WS",
        ioc: "SAM",
        fifa: "WSM",
        capital: "Apia",
        currency: CurrencyCode(882),
        call_codes: &[CallCode(685)],
        region: RegionCode::Oceania,
    },
    CountryRecord {
        code: CountryCode(744),
        name: "Svalbard and Jan Mayen Islands",
        alpha2: "SJ",
        alpha3: "SJM",
        fips: "SV",
        ioc: "SJM",
        fifa: "SJM",
        capital: "Longyearbyen",
        currency: CurrencyCode(578),
        call_codes: &[CallCode(4779)],
        region: RegionCode::Europe,
    },
    CountryRecord {
        code: CountryCode(796),
        name: "Turks and Caicos Islands",
        alpha2: "TC",
        alpha3: "TCA",
        fips: "TK",
        ioc: "TCA",
        fifa: "TCA",
        capital: "Cockburn Town",
        currency: CurrencyCode(840),
        call_codes: &[CallCode(1649)],
        region: RegionCode::NorthAmerica,
    },
    CountryRecord {
        code: CountryCode(581),
        name: "United States Minor Outlying Islands",
        alpha2: "UM",
        alpha3: "UMI",
        fips: "UM",
        ioc: "UMI",
        fifa: "UMI",
        capital: "",
        currency: CurrencyCode(840),
        call_codes: &[CallCode(1)],
        region: RegionCode::Oceania,
    },
    CountryRecord {
        code: CountryCode(586),
        name: "Pakistan",
        alpha2: "PK",
        alpha3: "PAK",
        fips: "PK",
        ioc: "PAK",
        fifa: "PAK",
        capital: "Islamabad",
        currency: CurrencyCode(586),
        call_codes: &[CallCode(92)],
        region: RegionCode::Asia,
    },
    CountryRecord {
        code: CountryCode(585),
        name: "Palau",
        alpha2: "PW",
        alpha3: "PLW",
        fips: "PS",
        ioc: "PLW",
        fifa: "PLW",
        capital: "Ngerulmud",
        currency: CurrencyCode(840),
        call_codes: &[CallCode(680)],
        region: RegionCode::Oceania,
    },
    CountryRecord {
        code: CountryCode(275),
        name: "Palestinian Territory (Occupied)",
        alpha2: "PS",
        alpha3: "PSE",
        fips: "WE",
        ioc: "PLE",
        fifa: "PLE",
        capital: "Ramallah",
        currency: CurrencyCode(376),
        call_codes: &[CallCode(970)],
        region: RegionCode::Asia,
    },
    CountryRecord {
        code: CountryCode(591),
        name: "Panama",
        alpha2: "PA",
        alpha3: "PAN",
        fips: "PM",
        ioc: "PAN",
        fifa: "PAN",
        capital: "Panama City",
        currency: CurrencyCode(590),
        call_codes: &[CallCode(507)],
        region: RegionCode::NorthAmerica,
    },
    CountryRecord {
        code: CountryCode(598),
        name: "Papua New Guinea",
        alpha2: "PG",
        alpha3: "PNG",
        fips: "PP",
        ioc: "PNG",
        fifa: "PNG",
        capital: "Port Moresby",
        currency: CurrencyCode(598),
        call_codes: &[CallCode(675)],
        region: RegionCode::Oceania,
    },
    CountryRecord {
        code: CountryCode(600),
        name: "Paraguay",
        alpha2: "PY",
        alpha3: "PRY",
        fips: "PA",
        ioc: "PAR",
        fifa: "PRY",
        capital: "Asuncion",
        currency: CurrencyCode(600),
        call_codes: &[CallCode(595)],
        region: RegionCode::SouthAmerica,
    },
    CountryRecord {
        code: CountryCode(604),
        name: "Peru",
        alpha2: "PE",
        alpha3: "PER",
        fips: "PE",
        ioc: "PER",
        fifa: "PER",
        capital: "Lima",
        currency: CurrencyCode(604),
        call_codes: &[CallCode(51)],
        region: RegionCode::SouthAmerica,
    },
    CountryRecord {
        code: CountryCode(616),
        name: "Poland",
        alpha2: "PL",
        alpha3: "POL",
        fips: "PL",
        ioc: "POL",
        fifa: "POL",
        capital: "Warsaw",
        currency: CurrencyCode(985),
        call_codes: &[CallCode(48)],
        region: RegionCode::Europe,
    },
    CountryRecord {
        code: CountryCode(620),
        name: "Portugal",
        alpha2: "PT",
        alpha3: "PRT",
        fips: "PO",
        ioc: "POR",
        fifa: "PRT",
        capital: "Lisbon",
        currency: CurrencyCode(978),
        call_codes: &[CallCode(351)],
        region: RegionCode::Europe,
    },
    CountryRecord {
        code: CountryCode(630),
        name: "Puerto Rico",
        alpha2: "PR",
        alpha3: "PRI",
        fips: "RQ",
        ioc: "PUR",
        fifa: "PRI",
        capital: "San Juan",
        currency: CurrencyCode(840),
        call_codes: &[CallCode(1787), CallCode(1939)],
        region: RegionCode::NorthAmerica,
    },
    CountryRecord {
        code: CountryCode(638),
        name: "Reunion",
        alpha2: "RE",
        alpha3: "REU",
        fips: "RE",
        ioc: "REU",
        fifa: "REU",
        capital: "Saint-Denis",
        currency: CurrencyCode(978),
        call_codes: &[CallCode(262)],
        region: RegionCode::Africa,
    },
    CountryRecord {
        code: CountryCode(643),
        name: "Russian Federation",
        alpha2: "RU",
        alpha3: "RUS",
        fips: "RS",
        ioc: "RUS",
        fifa: "RUS",
        capital: "Moscow",
        currency: CurrencyCode(643),
        call_codes: &[CallCode(7)],
        region: RegionCode::Europe,
    },
    CountryRecord {
        code: CountryCode(646),
        name: "Rwanda",
        alpha2: "RW",
        alpha3: "RWA",
        fips: "RW",
        ioc: "RWA",
        fifa: "RWA",
        capital: "Kigali",
        currency: CurrencyCode(646),
        call_codes: &[CallCode(250)],
        region: RegionCode::Africa,
    },
    CountryRecord {
        code: CountryCode(642),
        name: "Romania",
        alpha2: "RO",
        alpha3: "ROU",
        fips: "RO",
        ioc: "ROU",
        fifa: "ROU",
        capital: "Bucharest",
        currency: CurrencyCode(946),
        call_codes: &[CallCode(40)],
        region: RegionCode::Europe,
    },
    CountryRecord {
        code: CountryCode(222),
        name: "El Salvador",
        alpha2: "SV",
        alpha3: "SLV",
        fips: "ES",
        ioc: "ESA",
        fifa: "SLV",
        capital: "San Salvador",
        currency: CurrencyCode(222),
        call_codes: &[CallCode(503)],
        region: RegionCode::NorthAmerica,
    },
    CountryRecord {
        code: CountryCode(674),
        name: "San Marino",
        alpha2: "SM",
        alpha3: "SMR",
        fips: "SM",
        ioc: "SMR",
        fifa: "SMR",
        capital: "San Marino",
        currency: CurrencyCode(978),
        call_codes: &[CallCode(378)],
        region: RegionCode::Europe,
    },
    CountryRecord {
        code: CountryCode(678),
        name: "Sao Tome and Principe",
        alpha2: "ST",
        alpha3: "STP",
        fips: "TP",
        ioc: "STP",
        fifa: "STP",
        capital: "Sao Tome",
        currency: CurrencyCode(930),
        call_codes: &[CallCode(239)],
        region: RegionCode::Africa,
    },
    CountryRecord {
        code: CountryCode(682),
        name: "Saudi Arabia",
        alpha2: "SA",
        alpha3: "SAU",
        fips: "SA",
        ioc: "KSA",
        fifa: "SAU",
        capital: "Riyadh",
        currency: CurrencyCode(682),
        call_codes: &[CallCode(966)],
        region: RegionCode::Asia,
    },
    CountryRecord {
        code: CountryCode(748),
        name: "Swaziland",
        alpha2: "SZ",
        alpha3: "SWZ",
        fips: "WZ",
        ioc: "SWZ",
        fifa: "SWZ",
        capital: "Mbabane",
        currency: CurrencyCode(748),
        call_codes: &[CallCode(268)],
        region: RegionCode::Africa,
    },
    CountryRecord {
        code: CountryCode(690),
        name: "Seychelles",
        alpha2: "SC",
        alpha3: "SYC",
        fips: "SE",
        ioc: "SEY",
        fifa: "SYC",
        capital: "Victoria",
        currency: CurrencyCode(690),
        call_codes: &[CallCode(248)],
        region: RegionCode::Africa,
    },
    CountryRecord {
        code: CountryCode(686),
        name: "Senegal",
        alpha2: "SN",
        alpha3: "SEN",
        fips: "SG",
        ioc: "SEN",
        fifa: "SEN",
        capital: "Dakar",
        currency: CurrencyCode(952),
        call_codes: &[CallCode(221)],
        region: RegionCode::Africa,
    },
    CountryRecord {
        code: CountryCode(666),
        name: "Saint Pierre and Miquelon",
        alpha2: "PM",
        alpha3: "SPM",
        fips: "SB",
        ioc: "SPM",
        fifa: "SPM",
        capital: "Saint-Pierre",
        currency: CurrencyCode(978),
        call_codes: &[CallCode(508)],
        region: RegionCode::NorthAmerica,
    },
    CountryRecord {
        code: CountryCode(670),
        name: "Saint Vincent and the Grenadines",
        alpha2: "VC",
        alpha3: "VCT",
        fips: "VC",
        ioc: "VIN",
        fifa: "VCT",
        capital: "Kingstown",
        currency: CurrencyCode(951),
        call_codes: &[CallCode(1784)],
        region: RegionCode::NorthAmerica,
    },
    CountryRecord {
        code: CountryCode(659),
        name: "Saint Kitts and Nevis",
        alpha2: "KN",
        alpha3: "KNA",
        fips: "SC",
        ioc: "SKN",
        fifa: "KNA",
        capital: "Basseterre",
        currency: CurrencyCode(951),
        call_codes: &[CallCode(1869)],
        region: RegionCode::NorthAmerica,
    },
    CountryRecord {
        code: CountryCode(662),
        name: "Saint Lucia",
        alpha2: "LC",
        alpha3: "LCA",
        fips: "ST",
        ioc: "LCA",
        fifa: "LCA",
        capital: "Castries",
        currency: CurrencyCode(951),
        call_codes: &[CallCode(1758)],
        region: RegionCode::NorthAmerica,
    },
    CountryRecord {
        code: CountryCode(702),
        name: "Singapore",
        alpha2: "SG",
        alpha3: "SGP",
        fips: "SN",
        ioc: "SGP",
        fifa: "SGP",
        capital: "Singapore",
        currency: CurrencyCode(702),
        call_codes: &[CallCode(65)],
        region: RegionCode::Asia,
    },
    CountryRecord {
        code: CountryCode(760),
        name: "Syrian Arab Republic",
        alpha2: "SY",
        alpha3: "SYR",
        fips: "SY",
        ioc: "SYR",
        fifa: "SYR",
        capital: "Damascus",
        currency: CurrencyCode(760),
        call_codes: &[CallCode(963)],
        region: RegionCode::Asia,
    },
    CountryRecord {
        code: CountryCode(703),
        name: "Slovakia",
        alpha2: "SK",
        alpha3: "SVK",
        fips: "LO",
        ioc: "SVK",
        fifa: "SVK",
        capital: "Bratislava",
        currency: CurrencyCode(978),
        call_codes: &[CallCode(421)],
        region: RegionCode::Europe,
    },
    CountryRecord {
        code: CountryCode(705),
        name: "Slovenia",
        alpha2: "SI",
        alpha3: "SVN",
        fips: "SI",
        ioc: "SLO",
        fifa: "SVN",
        capital: "Ljubljana",
        currency: CurrencyCode(978),
        call_codes: &[CallCode(386)],
        region: RegionCode::Europe,
    },
    CountryRecord {
        code: CountryCode(840),
        name: "United States",
        alpha2: "US",
        alpha3: "USA",
        fips: "US",
        ioc: "USA",
        fifa: "USA",
        capital: "Washington",
        currency: CurrencyCode(840),
        call_codes: &[CallCode(1)],
        region: RegionCode::NorthAmerica,
    },
    CountryRecord {
        code: CountryCode(90),
        name: "Solomon Islands",
        alpha2: "SB",
        alpha3: "SLB",
        fips: "BP",
        ioc: "SOL",
        fifa: "SLB",
        capital: "Honiara",
        currency: CurrencyCode(90),
        call_codes: &[CallCode(677)],
        region: RegionCode::Oceania,
    },
    CountryRecord {
        code: CountryCode(706),
        name: "Somalia",
        alpha2: "SO",
        alpha3: "SOM",
        fips: "SO",
        ioc: "SOM",
        fifa: "SOM",
        capital: "Mogadishu",
        currency: CurrencyCode(706),
        call_codes: &[CallCode(252)],
        region: RegionCode::Africa,
    },
    CountryRecord {
        code: CountryCode(729),
        name: "Sudan",
        alpha2: "SD",
        alpha3: "SDN",
        fips: "SU",
        ioc: "SUD",
        fifa: "SDN",
        capital: "Khartoum",
        currency: CurrencyCode(938),
        call_codes: &[CallCode(249)],
        region: RegionCode::Africa,
    },
    CountryRecord {
        code: CountryCode(740),
        name: "Suriname",
        alpha2: "SR",
        alpha3: "SUR",
        fips: "NS",
        ioc: "SUR",
        fifa: "SUR",
        capital: "Paramaribo",
        currency: CurrencyCode(968),
        call_codes: &[CallCode(597)],
        region: RegionCode::SouthAmerica,
    },
    CountryRecord {
        code: CountryCode(694),
        name: "Sierra Leone",
        alpha2: "SL",
        alpha3: "SLE",
        fips: "SL",
        ioc: "SLE",
        fifa: "SLE",
        capital: "Freetown",
        currency: CurrencyCode(694),
        call_codes: &[CallCode(232)],
        region: RegionCode::Africa,
    },
    CountryRecord {
        code: CountryCode(762),
        name: "Tajikistan",
        alpha2: "TJ",
        alpha3: "TJK",
        fips: "TI",
        ioc: "TJK",
        fifa: "TJK",
        capital: "Dushanbe",
        currency: CurrencyCode(972),
        call_codes: &[CallCode(992)],
        region: RegionCode::Asia,
    },
    CountryRecord {
        code: CountryCode(158),
        name: "Taiwan (Province of China)",
        alpha2: "TW",
        alpha3: "TWN",
        fips: "TW",
        ioc: "TPE",
        fifa: "TPE",
        capital: "Taipei",
        currency: CurrencyCode(901),
        call_codes: &[CallCode(886)],
        region: RegionCode::Asia,
    },
    CountryRecord {
        code: CountryCode(764),
        name: "Thailand",
        alpha2: "TH",
        alpha3: "THA",
        fips: "TH",
        ioc: "THA",
        fifa: "THA",
        capital: "Bangkok",
        currency: CurrencyCode(764),
        call_codes: &[CallCode(66)],
        region: RegionCode::Asia,
    },
    CountryRecord {
        code: CountryCode(834),
        name: "Tanzania (United Republic of)",
        alpha2: "TZ",
        alpha3: "TZA",
        fips: "TZ",
        ioc: "TAN",
        fifa: "TZA",
        capital: "Dodoma",
        currency: CurrencyCode(834),
        call_codes: &[CallCode(255)],
        region: RegionCode::Africa,
    },
    CountryRecord {
        code: CountryCode(768),
        name: "Togo",
        alpha2: "TG",
        alpha3: "TGO",
        fips: "TO",
        ioc: "TOG",
        fifa: "TGO",
        capital: "Lome",
        currency: CurrencyCode(952),
        call_codes: &[CallCode(228)],
        region: RegionCode::Africa,
    },
    CountryRecord {
        code: CountryCode(772),
        name: "Tokelau",
        alpha2: "TK",
        alpha3: "TKL",
        fips: "TL",
        ioc: "TKL",
        fifa: "TKL",
        capital: "",
        currency: CurrencyCode(554),
        call_codes: &[CallCode(690)],
        region: RegionCode::Oceania,
    },
    CountryRecord {
        code: CountryCode(776),
        name: "Tonga",
        alpha2: "TO",
        alpha3: "TON",
        fips: "TN",
        ioc: "TGA",
        fifa: "TON",
        capital: "Nuku'alofa",
        currency: CurrencyCode(776),
        call_codes: &[CallCode(676)],
        region: RegionCode::Oceania,
    },
    CountryRecord {
        code: CountryCode(780),
        name: "Trinidad and Tobago",
        alpha2: "TT",
        alpha3: "TTO",
        fips: "TD",
        ioc: "TRI",
        fifa: "TTO",
        capital: "Port of Spain",
        currency: CurrencyCode(780),
        call_codes: &[CallCode(1868)],
        region: RegionCode::NorthAmerica,
    },
    CountryRecord {
        code: CountryCode(798),
        name: "Tuvalu",
        alpha2: "TV",
        alpha3: "TUV",
        fips: "TV",
        ioc: "TUV",
        fifa: "TUV",
        capital: "Funafuti",
        currency: CurrencyCode(36),
        call_codes: &[CallCode(688)],
        region: RegionCode::Oceania,
    },
    CountryRecord {
        code: CountryCode(788),
        name: "Tunisia",
        alpha2: "TN",
        alpha3: "TUN",
        fips: "TS",
        ioc: "TUN",
        fifa: "TUN",
        capital: "Tunis",
        currency: CurrencyCode(788),
        call_codes: &[CallCode(216)],
        region: RegionCode::Africa,
    },
    CountryRecord {
        code: CountryCode(795),
        name: "Turkmenistan",
        alpha2: "TM",
        alpha3: "TKM",
        fips: "TX",
        ioc: "TKM",
        fifa: "TKM",
        capital: "Ashgabat",
        currency: CurrencyCode(934),
        call_codes: &[CallCode(993)],
        region: RegionCode::Asia,
    },
    CountryRecord {
        code: CountryCode(792),
        name: "Turkey",
        alpha2: "TR",
        alpha3: "TUR",
        fips: "TU",
        ioc: "TUR",
        fifa: "TUR",
        capital: "Ankara",
        currency: CurrencyCode(949),
        call_codes: &[CallCode(90)],
        region: RegionCode::Europe,
    },
    CountryRecord {
        code: CountryCode(800),
        name: "Uganda",
        alpha2: "UG",
        alpha3: "UGA",
        fips: "UG",
        ioc: "UGA",
        fifa: "UGA",
        capital: "Kampala",
        currency: CurrencyCode(800),
        call_codes: &[CallCode(256)],
        region: RegionCode::Africa,
    },
    CountryRecord {
        code: CountryCode(860),
        name: "Uzbekistan",
        alpha2: "UZ",
        alpha3: "UZB",
        fips: "UZ",
        ioc: "UZB",
        fifa: "UZB",
        capital: "Tashkent",
        currency: CurrencyCode(860),
        call_codes: &[CallCode(998)],
        region: RegionCode::Asia,
    },
    CountryRecord {
        code: CountryCode(804),
        name: "Ukraine",
        alpha2: "UA",
        alpha3: "UKR",
        fips: "UP",
        ioc: "UKR",
        fifa: "UKR",
        capital: "Kyiv",
        currency: CurrencyCode(980),
        call_codes: &[CallCode(380)],
        region: RegionCode::Europe,
    },
    CountryRecord {
        code: CountryCode(858),
        name: "Uruguay",
        alpha2: "UY",
        alpha3: "URY",
        fips: "UY",
        ioc: "URU",
        fifa: "URY",
        capital: "Montevideo",
        currency: CurrencyCode(940),
        call_codes: &[CallCode(598)],
        region: RegionCode::SouthAmerica,
    },
    CountryRecord {
        code: CountryCode(234),
        name: "Faroe Islands",
        alpha2: "FO",
        alpha3: "FRO",
        fips: "FO",
        ioc: "FRO",
        fifa: "FRO",
        capital: "Torshavn",
        currency: CurrencyCode(208),
        call_codes: &[CallCode(298)],
        region: RegionCode::Europe,
    },
    CountryRecord {
        code: CountryCode(242),
        name: "Fiji",
        alpha2: "FJ",
        alpha3: "FJI",
        fips: "FJ",
        ioc: "FIJ",
        fifa: "FJI",
        capital: "Suva",
        currency: CurrencyCode(242),
        call_codes: &[CallCode(679)],
        region: RegionCode::Oceania,
    },
    CountryRecord {
        code: CountryCode(608),
        name: "Philippines",
        alpha2: "PH",
        alpha3: "PHL",
        fips: "RP",
        ioc: "PHI",
        fifa: "PHL",
        capital: "Manila",
        currency: CurrencyCode(608),
        call_codes: &[CallCode(63)],
        region: RegionCode::Asia,
    },
    CountryRecord {
        code: CountryCode(246),
        name: "Finland",
        alpha2: "FI",
        alpha3: "FIN",
        fips: "FI",
        ioc: "FIN",
        fifa: "FIN",
        capital: "Helsinki",
        currency: CurrencyCode(978),
        call_codes: &[CallCode(358)],
        region: RegionCode::Europe,
    },
    CountryRecord {
        code: CountryCode(238),
        name: "Falkland Islands (Malvinas)",
        alpha2: "FK",
        alpha3: "FLK",
        fips: "FK",
        ioc: "FLK",
        fifa: "FLK",
        capital: "Stanley",
        currency: CurrencyCode(238),
        call_codes: &[CallCode(500)],
        region: RegionCode::SouthAmerica,
    },
    CountryRecord {
        code: CountryCode(250),
        name: "France",
        alpha2: "FR",
        alpha3: "FRA",
        fips: "FR",
        ioc: "FRA",
        fifa: "FRA",
        capital: "Paris",
        currency: CurrencyCode(978),
        call_codes: &[CallCode(33)],
        region: RegionCode::Europe,
    },
    CountryRecord {
        code: CountryCode(254),
        name: "French Guiana",
        alpha2: "GF",
        alpha3: "GUF",
        fips: "FG",
        ioc: "GUF",
        fifa: "GUF",
        capital: "Cayenne",
        currency: CurrencyCode(978),
        call_codes: &[CallCode(594)],
        region: RegionCode::SouthAmerica,
    },
    CountryRecord {
        code: CountryCode(258),
        name: "French Polynesia",
        alpha2: "PF",
        alpha3: "PYF",
        fips: "FP",
        ioc: "PYF",
        fifa: "PYF",
        capital: "Papeete",
        currency: CurrencyCode(953),
        call_codes: &[CallCode(689)],
        region: RegionCode::Oceania,
    },
    CountryRecord {
        code: CountryCode(260),
        name: "French Southern Territories",
        alpha2: "TF",
        alpha3: "ATF",
        fips: "FS",
        ioc: "ATF",
        fifa: "ATF",
        capital: "Port-aux-Francais",
        currency: CurrencyCode(978),
        call_codes: &[CallCode(1)],
        region: RegionCode::Antarctica,
    },
    CountryRecord {
        code: CountryCode(191),
        name: "Croatia",
        alpha2: "HR",
        alpha3: "HRV",
        fips: "HR",
        ioc: "CRO",
        fifa: "CRO",
        capital: "Zagreb",
        currency: CurrencyCode(978),
        call_codes: &[CallCode(385)],
        region: RegionCode::Europe,
    },
    CountryRecord {
        code: CountryCode(140),
        name: "Central African Republic",
        alpha2: "CF",
        alpha3: "CAF",
        fips: "CT",
        ioc: "CAF",
        fifa: "CTA",
        capital: "Bangui",
        currency: CurrencyCode(950),
        call_codes: &[CallCode(236)],
        region: RegionCode::Africa,
    },
    CountryRecord {
        code: CountryCode(148),
        name: "Chad",
        alpha2: "TD",
        alpha3: "TCD",
        fips: "CD",
        ioc: "CHA",
        fifa: "TCD",
        capital: "N'Djamena",
        currency: CurrencyCode(950),
        call_codes: &[CallCode(235)],
        region: RegionCode::Africa,
    },
    CountryRecord {
        code: CountryCode(203),
        name: "Czechia",
        alpha2: "CZ",
        alpha3: "CZE",
        fips: "EZ",
        ioc: "CZE",
        fifa: "CZE",
        capital: "Prague",
        currency: CurrencyCode(203),
        call_codes: &[CallCode(420)],
        region: RegionCode::Europe,
    },
    CountryRecord {
        code: CountryCode(152),
        name: "Chile",
        alpha2: "CL",
        alpha3: "CHL",
        fips: "CI",
        ioc: "CHI",
        fifa: "CHL",
        capital: "Santiago",
        currency: CurrencyCode(152),
        call_codes: &[CallCode(56)],
        region: RegionCode::SouthAmerica,
    },
    CountryRecord {
        code: CountryCode(756),
        name: "Switzerland",
        alpha2: "CH",
        alpha3: "CHE",
        fips: "SZ",
        ioc: "SUI",
        fifa: "CHE",
        capital: "Bern",
        currency: CurrencyCode(756),
        call_codes: &[CallCode(41)],
        region: RegionCode::Europe,
    },
    CountryRecord {
        code: CountryCode(752),
        name: "Sweden",
        alpha2: "SE",
        alpha3: "SWE",
        fips: "SW",
        ioc: "SWE",
        fifa: "SWE",
        capital: "Stockholm",
        currency: CurrencyCode(752),
        call_codes: &[CallCode(46)],
        region: RegionCode::Europe,
    },
    CountryRecord {
        code: CountryCode(144),
        name: "Sri Lanka",
        alpha2: "LK",
        alpha3: "LKA",
        fips: "CE",
        ioc: "SRI",
        fifa: "LKA",
        capital: "Sri Jayawardenepura Kotte",
        currency: CurrencyCode(144),
        call_codes: &[CallCode(94)],
        region: RegionCode::Asia,
    },
    CountryRecord {
        code: CountryCode(218),
        name: "Ecuador",
        alpha2: "EC",
        alpha3: "ECU",
        fips: "EC",
        ioc: "ECU",
        fifa: "ECU",
        capital: "Quito",
        currency: CurrencyCode(840),
        call_codes: &[CallCode(593)],
        region: RegionCode::SouthAmerica,
    },
    CountryRecord {
        code: CountryCode(226),
        name: "Equatorial Guinea",
        alpha2: "GQ",
        alpha3: "GNQ",
        fips: "EK",
        ioc: "GEQ",
        fifa: "GNQ",
        capital: "Malabo",
        currency: CurrencyCode(950),
        call_codes: &[CallCode(240)],
        region: RegionCode::Africa,
    },
    CountryRecord {
        code: CountryCode(232),
        name: "Eritrea",
        alpha2: "ER",
        alpha3: "ERI",
        fips: "ER",
        ioc: "ERI",
        fifa: "ERI",
        capital: "Asmara",
        currency: CurrencyCode(232),
        call_codes: &[CallCode(291)],
        region: RegionCode::Africa,
    },
    CountryRecord {
        code: CountryCode(233),
        name: "Estonia",
        alpha2: "EE",
        alpha3: "EST",
        fips: "EN",
        ioc: "EST",
        fifa: "EST",
        capital: "Tallinn",
        currency: CurrencyCode(978),
        call_codes: &[CallCode(372)],
        region: RegionCode::Europe,
    },
    CountryRecord {
        code: CountryCode(231),
        name: "Ethiopia",
        alpha2: "ET",
        alpha3: "ETH",
        fips: "ET",
        ioc: "ETH",
        fifa: "ETH",
        capital: "Addis Ababa",
        currency: CurrencyCode(230),
        call_codes: &[CallCode(251)],
        region: RegionCode::Africa,
    },
    CountryRecord {
        code: CountryCode(710),
        name: "South Africa",
        alpha2: "ZA",
        alpha3: "ZAF",
        fips: "SF",
        ioc: "RSA",
        fifa: "ZAF",
        capital: "Pretoria",
        currency: CurrencyCode(710),
        call_codes: &[CallCode(27)],
        region: RegionCode::Africa,
    },
    CountryRecord {
        code: CountryCode(891),
        name: "Yugoslavia",
        alpha2: "YU",
        alpha3: "YUG",
        fips: "YI",
        ioc: "YUG",
        fifa: "YUG",
        capital: "Belgrade",
        currency: CurrencyCode(890),
        call_codes: &[CallCode(38)],
        region: RegionCode::Europe,
    },
    CountryRecord {
        code: CountryCode(239),
        name: "South Georgia and The South Sandwich Islands",
        alpha2: "GS",
        alpha3: "SGS",
        fips: "SX",
        ioc: "SGS",
        fifa: "SGS",
        capital: "King Edward Point",
        currency: CurrencyCode(826),
        call_codes: &[CallCode(500)],
        region: RegionCode::Antarctica,
    },
    CountryRecord {
        code: CountryCode(388),
        name: "Jamaica",
        alpha2: "JM",
        alpha3: "JAM",
        fips: "JM",
        ioc: "JAM",
        fifa: "JAM",
        capital: "Kingston",
        currency: CurrencyCode(388),
        call_codes: &[CallCode(1876), CallCode(1658)],
        region: RegionCode::NorthAmerica,
    },
    CountryRecord {
        code: CountryCode(499),
        name: "Montenegro",
        alpha2: "ME",
        alpha3: "MNE",
        fips: "MW",
        ioc: "MNE",
        fifa: "MNE",
        capital: "Podgorica",
        currency: CurrencyCode(978),
        call_codes: &[CallCode(382)],
        region: RegionCode::Europe,
    },
    CountryRecord {
        code: CountryCode(652),
        name: "Saint Barthelemy",
        alpha2: "BL",
        alpha3: "BLM",
        fips: "TB",
        ioc: "BLM",
        fifa: "BLM",
        capital: "Gustavia",
        currency: CurrencyCode(978),
        call_codes: &[CallCode(590)],
        region: RegionCode::NorthAmerica,
    },
    CountryRecord {
        code: CountryCode(534),
        name: "Sint Maarten Dutch",
        alpha2: "SX",
        alpha3: "SXM",
        fips: "NN",
        ioc: "SXM",
        fifa: "SXM",
        capital: "Philipsburg",
        currency: CurrencyCode(532),
        call_codes: &[CallCode(1721)],
        region: RegionCode::NorthAmerica,
    },
    CountryRecord {
        code: CountryCode(688),
        name: "Serbia",
        alpha2: "RS",
        alpha3: "SRB",
        fips: "RI",
        ioc: "SRB",
        fifa: "SRB",
        capital: "Belgrade",
        currency: CurrencyCode(941),
        call_codes: &[CallCode(381)],
        region: RegionCode::Europe,
    },
    CountryRecord {
        code: CountryCode(248),
        name: "Aland Islands",
        alpha2: "AX",
        alpha3: "ALA",
        fips: "Aland Islands",
        ioc: "ALA",
        fifa: "ALA",
        capital: "Mariehamn",
        currency: CurrencyCode(978),
        call_codes: &[CallCode(35818)],
        region: RegionCode::Europe,
    },
    CountryRecord {
        code: CountryCode(535),
        name: "Bonaire, Sint Eustatius And Saba",
        alpha2: "BQ",
        alpha3: "BES",
        fips: "Bonaire, Sint Eustatius And Saba",
        ioc: "BES",
        fifa: "BES",
        capital: "Kralendijk",
        currency: CurrencyCode(840),
        call_codes: &[CallCode(5993), CallCode(5994)],
        region: RegionCode::NorthAmerica,
    },
    CountryRecord {
        code: CountryCode(831),
        name: "Guernsey",
        alpha2: "GG",
        alpha3: "GGY",
        fips: "GK",
        ioc: "GGY",
        fifa: "GGY",
        capital: "Saint Peter Port",
        currency: CurrencyCode(826),
        call_codes: &[CallCode(441481)],
        region: RegionCode::Europe,
    },
    CountryRecord {
        code: CountryCode(832),
        name: "Jersey",
        alpha2: "JE",
        alpha3: "JEY",
        fips: "JE",
        ioc: "JEY",
        fifa: "JEY",
        capital: "Saint Helier",
        currency: CurrencyCode(826),
        call_codes: &[CallCode(441534)],
        region: RegionCode::Europe,
    },
    CountryRecord {
        code: CountryCode(531),
        name: "Curacao",
        alpha2: "CW",
        alpha3: "CUW",
        fips: "UC",
        ioc: "CUW",
        fifa: "CUW",
        capital: "Willemstad",
        currency: CurrencyCode(532),
        call_codes: &[CallCode(5999)],
        region: RegionCode::Oceania,
    },
    CountryRecord {
        code: CountryCode(663),
        name: "Saint Martin French",
        alpha2: "MF",
        alpha3: "MAF",
        fips: "RN",
        ioc: "MAF",
        fifa: "MAF",
        capital: "Marigot",
        currency: CurrencyCode(978),
        call_codes: &[CallCode(590)],
        region: RegionCode::NorthAmerica,
    },
    CountryRecord {
        code: CountryCode(728),
        name: "South Sudan",
        alpha2: "SS",
        alpha3: "SSD",
        fips: "OD",
        ioc: "SSD",
        fifa: "SSD",
        capital: "Juba",
        currency: CurrencyCode(728),
        call_codes: &[CallCode(211)],
        region: RegionCode::Africa,
    },
    CountryRecord {
        code: CountryCode(392),
        name: "Japan",
        alpha2: "JP",
        alpha3: "JPN",
        fips: "JA",
        ioc: "JPN",
        fifa: "JPN",
        capital: "Tokyo",
        currency: CurrencyCode(392),
        call_codes: &[CallCode(81)],
        region: RegionCode::Asia,
    },
    CountryRecord {
        code: CountryCode(900),
        name: "Kosovo",
        alpha2: "XK",
        alpha3: "XKX",
        fips: "KV",
        ioc: "KOS",
        fifa: "XKX",
        capital: "Pristina",
        currency: CurrencyCode(978),
        call_codes: &[CallCode(383)],
        region: RegionCode::Europe,
    },
];

/// Pseudo-codes: the `None` / `International` placeholders and the ITU
/// non-geographic service codes. Resolvable and valid, but not countries.
pub static NON_COUNTRIES: &[CountryRecord] = &[
    CountryRecord {
        code: CountryCode(998),
        name: "None",
        alpha2: "None",
        alpha3: "None",
        fips: "None",
        ioc: "None",
        fifa: "None",
        capital: "",
        currency: CurrencyCode::NONE,
        call_codes: &[],
        region: RegionCode::None,
    },
    CountryRecord {
        code: CountryCode(999),
        name: "International",
        alpha2: "International",
        alpha3: "International",
        fips: "International",
        ioc: "International",
        fifa: "International",
        capital: "",
        currency: CurrencyCode::NONE,
        call_codes: &[CallCode(800), CallCode(870), CallCode(875), CallCode(876), CallCode(877), CallCode(878), CallCode(879), CallCode(881)],
        region: RegionCode::None,
    },
    CountryRecord {
        code: CountryCode(999800),
        name: "International Freephone",
        alpha2: "International Freephone",
        alpha3: "International Freephone",
        fips: "International Freephone",
        ioc: "International Freephone",
        fifa: "International Freephone",
        capital: "",
        currency: CurrencyCode::NONE,
        call_codes: &[CallCode(800)],
        region: RegionCode::None,
    },
    CountryRecord {
        code: CountryCode(999870),
        name: "Inmarsat",
        alpha2: "Inmarsat",
        alpha3: "Inmarsat",
        fips: "Inmarsat",
        ioc: "Inmarsat",
        fifa: "Inmarsat",
        capital: "",
        currency: CurrencyCode::NONE,
        call_codes: &[CallCode(870)],
        region: RegionCode::None,
    },
    CountryRecord {
        code: CountryCode(999875),
        name: "Maritime Mobile service",
        alpha2: "Maritime Mobile service",
        alpha3: "Maritime Mobile service",
        fips: "Maritime Mobile service",
        ioc: "Maritime Mobile service",
        fifa: "Maritime Mobile service",
        capital: "",
        currency: CurrencyCode::NONE,
        call_codes: &[CallCode(875), CallCode(876), CallCode(877)],
        region: RegionCode::None,
    },
    CountryRecord {
        code: CountryCode(999878),
        name: "Universal Personal Telecommunications services",
        alpha2: "Universal Personal Telecommunications services",
        alpha3: "Universal Personal Telecommunications services",
        fips: "Universal Personal Telecommunications services",
        ioc: "Universal Personal Telecommunications services",
        fifa: "Universal Personal Telecommunications services",
        capital: "",
        currency: CurrencyCode::NONE,
        call_codes: &[CallCode(878)],
        region: RegionCode::None,
    },
    CountryRecord {
        code: CountryCode(999879),
        name: "National non-commercial purposes",
        alpha2: "National non-commercial purposes",
        alpha3: "National non-commercial purposes",
        fips: "National non-commercial purposes",
        ioc: "National non-commercial purposes",
        fifa: "National non-commercial purposes",
        capital: "",
        currency: CurrencyCode::NONE,
        call_codes: &[CallCode(879)],
        region: RegionCode::None,
    },
    CountryRecord {
        code: CountryCode(999881),
        name: "Global Mobile Satellite System",
        alpha2: "Global Mobile Satellite System",
        alpha3: "Global Mobile Satellite System",
        fips: "Global Mobile Satellite System",
        ioc: "Global Mobile Satellite System",
        fifa: "Global Mobile Satellite System",
        capital: "",
        currency: CurrencyCode::NONE,
        call_codes: &[CallCode(881)],
        region: RegionCode::None,
    },
    CountryRecord {
        code: CountryCode(999882),
        name: "International Networks",
        alpha2: "International Networks",
        alpha3: "International Networks",
        fips: "International Networks",
        ioc: "International Networks",
        fifa: "International Networks",
        capital: "",
        currency: CurrencyCode::NONE,
        call_codes: &[CallCode(882), CallCode(883)],
        region: RegionCode::None,
    },
    CountryRecord {
        code: CountryCode(999888),
        name: "Disaster Relief",
        alpha2: "Disaster Relief",
        alpha3: "Disaster Relief",
        fips: "Disaster Relief",
        ioc: "Disaster Relief",
        fifa: "Disaster Relief",
        capital: "",
        currency: CurrencyCode::NONE,
        call_codes: &[CallCode(888)],
        region: RegionCode::None,
    },
    CountryRecord {
        code: CountryCode(999979),
        name: "International Premium Rate Service",
        alpha2: "International Premium Rate Service",
        alpha3: "International Premium Rate Service",
        fips: "International Premium Rate Service",
        ioc: "International Premium Rate Service",
        fifa: "International Premium Rate Service",
        capital: "",
        currency: CurrencyCode::NONE,
        call_codes: &[CallCode(979)],
        region: RegionCode::None,
    },
    CountryRecord {
        code: CountryCode(999991),
        name: "International Telecommunications Public Correspondence Service",
        alpha2: "International Telecommunications Public Correspondence Service",
        alpha3: "International Telecommunications Public Correspondence Service",
        fips: "International Telecommunications Public Correspondence Service",
        ioc: "International Telecommunications Public Correspondence Service",
        fifa: "International Telecommunications Public Correspondence Service",
        capital: "",
        currency: CurrencyCode::NONE,
        call_codes: &[CallCode(991)],
        region: RegionCode::None,
    },
];
