// Generated from the upstream ISO 3166 / ITU reference dataset.
// Do not edit by hand; regenerate when the dataset is refreshed.

use crate::core::currency::{CurrencyCode, CurrencyRecord};

/// ISO 4217 currencies referenced by the country table.
pub static CURRENCIES: &[CurrencyRecord] = &[
    CurrencyRecord {
        code: CurrencyCode(784),
        alpha: "AED",
        name: "UAE Dirham",
    },
    CurrencyRecord {
        code: CurrencyCode(971),
        alpha: "AFN",
        name: "Afghani",
    },
    CurrencyRecord {
        code: CurrencyCode(8),
        alpha: "ALL",
        name: "Lek",
    },
    CurrencyRecord {
        code: CurrencyCode(51),
        alpha: "AMD",
        name: "Armenian Dram",
    },
    CurrencyRecord {
        code: CurrencyCode(532),
        alpha: "ANG",
        name: "Netherlands Antillean Guilder",
    },
    CurrencyRecord {
        code: CurrencyCode(973),
        alpha: "AOA",
        name: "Kwanza",
    },
    CurrencyRecord {
        code: CurrencyCode(32),
        alpha: "ARS",
        name: "Argentine Peso",
    },
    CurrencyRecord {
        code: CurrencyCode(36),
        alpha: "AUD",
        name: "Australian Dollar",
    },
    CurrencyRecord {
        code: CurrencyCode(533),
        alpha: "AWG",
        name: "Aruban Florin",
    },
    CurrencyRecord {
        code: CurrencyCode(944),
        alpha: "AZN",
        name: "Azerbaijan Manat",
    },
    CurrencyRecord {
        code: CurrencyCode(977),
        alpha: "BAM",
        name: "Convertible Mark",
    },
    CurrencyRecord {
        code: CurrencyCode(52),
        alpha: "BBD",
        name: "Barbados Dollar",
    },
    CurrencyRecord {
        code: CurrencyCode(50),
        alpha: "BDT",
        name: "Taka",
    },
    CurrencyRecord {
        code: CurrencyCode(975),
        alpha: "BGN",
        name: "Bulgarian Lev",
    },
    CurrencyRecord {
        code: CurrencyCode(48),
        alpha: "BHD",
        name: "Bahraini Dinar",
    },
    CurrencyRecord {
        code: CurrencyCode(108),
        alpha: "BIF",
        name: "Burundi Franc",
    },
    CurrencyRecord {
        code: CurrencyCode(60),
        alpha: "BMD",
        name: "Bermudian Dollar",
    },
    CurrencyRecord {
        code: CurrencyCode(96),
        alpha: "BND",
        name: "Brunei Dollar",
    },
    CurrencyRecord {
        code: CurrencyCode(68),
        alpha: "BOB",
        name: "Boliviano",
    },
    CurrencyRecord {
        code: CurrencyCode(986),
        alpha: "BRL",
        name: "Brazilian Real",
    },
    CurrencyRecord {
        code: CurrencyCode(44),
        alpha: "BSD",
        name: "Bahamian Dollar",
    },
    CurrencyRecord {
        code: CurrencyCode(64),
        alpha: "BTN",
        name: "Ngultrum",
    },
    CurrencyRecord {
        code: CurrencyCode(72),
        alpha: "BWP",
        name: "Pula",
    },
    CurrencyRecord {
        code: CurrencyCode(933),
        alpha: "BYN",
        name: "Belarusian Ruble",
    },
    CurrencyRecord {
        code: CurrencyCode(84),
        alpha: "BZD",
        name: "Belize Dollar",
    },
    CurrencyRecord {
        code: CurrencyCode(124),
        alpha: "CAD",
        name: "Canadian Dollar",
    },
    CurrencyRecord {
        code: CurrencyCode(976),
        alpha: "CDF",
        name: "Congolese Franc",
    },
    CurrencyRecord {
        code: CurrencyCode(756),
        alpha: "CHF",
        name: "Swiss Franc",
    },
    CurrencyRecord {
        code: CurrencyCode(152),
        alpha: "CLP",
        name: "Chilean Peso",
    },
    CurrencyRecord {
        code: CurrencyCode(156),
        alpha: "CNY",
        name: "Yuan Renminbi",
    },
    CurrencyRecord {
        code: CurrencyCode(170),
        alpha: "COP",
        name: "Colombian Peso",
    },
    CurrencyRecord {
        code: CurrencyCode(188),
        alpha: "CRC",
        name: "Costa Rican Colon",
    },
    CurrencyRecord {
        code: CurrencyCode(931),
        alpha: "CUC",
        name: "Peso Convertible",
    },
    CurrencyRecord {
        code: CurrencyCode(132),
        alpha: "CVE",
        name: "Cabo Verde Escudo",
    },
    CurrencyRecord {
        code: CurrencyCode(203),
        alpha: "CZK",
        name: "Czech Koruna",
    },
    CurrencyRecord {
        code: CurrencyCode(262),
        alpha: "DJF",
        name: "Djibouti Franc",
    },
    CurrencyRecord {
        code: CurrencyCode(208),
        alpha: "DKK",
        name: "Danish Krone",
    },
    CurrencyRecord {
        code: CurrencyCode(214),
        alpha: "DOP",
        name: "Dominican Peso",
    },
    CurrencyRecord {
        code: CurrencyCode(12),
        alpha: "DZD",
        name: "Algerian Dinar",
    },
    CurrencyRecord {
        code: CurrencyCode(818),
        alpha: "EGP",
        name: "Egyptian Pound",
    },
    CurrencyRecord {
        code: CurrencyCode(232),
        alpha: "ERN",
        name: "Nakfa",
    },
    CurrencyRecord {
        code: CurrencyCode(230),
        alpha: "ETB",
        name: "Ethiopian Birr",
    },
    CurrencyRecord {
        code: CurrencyCode(978),
        alpha: "EUR",
        name: "Euro",
    },
    CurrencyRecord {
        code: CurrencyCode(242),
        alpha: "FJD",
        name: "Fiji Dollar",
    },
    CurrencyRecord {
        code: CurrencyCode(238),
        alpha: "FKP",
        name: "Falkland Islands Pound",
    },
    CurrencyRecord {
        code: CurrencyCode(826),
        alpha: "GBP",
        name: "Pound Sterling",
    },
    CurrencyRecord {
        code: CurrencyCode(981),
        alpha: "GEL",
        name: "Lari",
    },
    CurrencyRecord {
        code: CurrencyCode(936),
        alpha: "GHS",
        name: "Ghana Cedi",
    },
    CurrencyRecord {
        code: CurrencyCode(292),
        alpha: "GIP",
        name: "Gibraltar Pound",
    },
    CurrencyRecord {
        code: CurrencyCode(270),
        alpha: "GMD",
        name: "Dalasi",
    },
    CurrencyRecord {
        code: CurrencyCode(324),
        alpha: "GNF",
        name: "Guinean Franc",
    },
    CurrencyRecord {
        code: CurrencyCode(320),
        alpha: "GTQ",
        name: "Quetzal",
    },
    CurrencyRecord {
        code: CurrencyCode(328),
        alpha: "GYD",
        name: "Guyana Dollar",
    },
    CurrencyRecord {
        code: CurrencyCode(344),
        alpha: "HKD",
        name: "Hong Kong Dollar",
    },
    CurrencyRecord {
        code: CurrencyCode(340),
        alpha: "HNL",
        name: "Lempira",
    },
    CurrencyRecord {
        code: CurrencyCode(332),
        alpha: "HTG",
        name: "Gourde",
    },
    CurrencyRecord {
        code: CurrencyCode(348),
        alpha: "HUF",
        name: "Forint",
    },
    CurrencyRecord {
        code: CurrencyCode(360),
        alpha: "IDR",
        name: "Rupiah",
    },
    CurrencyRecord {
        code: CurrencyCode(376),
        alpha: "ILS",
        name: "New Israeli Sheqel",
    },
    CurrencyRecord {
        code: CurrencyCode(356),
        alpha: "INR",
        name: "Indian Rupee",
    },
    CurrencyRecord {
        code: CurrencyCode(368),
        alpha: "IQD",
        name: "Iraqi Dinar",
    },
    CurrencyRecord {
        code: CurrencyCode(364),
        alpha: "IRR",
        name: "Iranian Rial",
    },
    CurrencyRecord {
        code: CurrencyCode(352),
        alpha: "ISK",
        name: "Iceland Krona",
    },
    CurrencyRecord {
        code: CurrencyCode(388),
        alpha: "JMD",
        name: "Jamaican Dollar",
    },
    CurrencyRecord {
        code: CurrencyCode(400),
        alpha: "JOD",
        name: "Jordanian Dinar",
    },
    CurrencyRecord {
        code: CurrencyCode(392),
        alpha: "JPY",
        name: "Yen",
    },
    CurrencyRecord {
        code: CurrencyCode(404),
        alpha: "KES",
        name: "Kenyan Shilling",
    },
    CurrencyRecord {
        code: CurrencyCode(417),
        alpha: "KGS",
        name: "Som",
    },
    CurrencyRecord {
        code: CurrencyCode(116),
        alpha: "KHR",
        name: "Riel",
    },
    CurrencyRecord {
        code: CurrencyCode(174),
        alpha: "KMF",
        name: "Comorian Franc",
    },
    CurrencyRecord {
        code: CurrencyCode(408),
        alpha: "KPW",
        name: "North Korean Won",
    },
    CurrencyRecord {
        code: CurrencyCode(410),
        alpha: "KRW",
        name: "Won",
    },
    CurrencyRecord {
        code: CurrencyCode(414),
        alpha: "KWD",
        name: "Kuwaiti Dinar",
    },
    CurrencyRecord {
        code: CurrencyCode(136),
        alpha: "KYD",
        name: "Cayman Islands Dollar",
    },
    CurrencyRecord {
        code: CurrencyCode(398),
        alpha: "KZT",
        name: "Tenge",
    },
    CurrencyRecord {
        code: CurrencyCode(418),
        alpha: "LAK",
        name: "Lao Kip",
    },
    CurrencyRecord {
        code: CurrencyCode(422),
        alpha: "LBP",
        name: "Lebanese Pound",
    },
    CurrencyRecord {
        code: CurrencyCode(144),
        alpha: "LKR",
        name: "Sri Lanka Rupee",
    },
    CurrencyRecord {
        code: CurrencyCode(430),
        alpha: "LRD",
        name: "Liberian Dollar",
    },
    CurrencyRecord {
        code: CurrencyCode(426),
        alpha: "LSL",
        name: "Loti",
    },
    CurrencyRecord {
        code: CurrencyCode(434),
        alpha: "LYD",
        name: "Libyan Dinar",
    },
    CurrencyRecord {
        code: CurrencyCode(504),
        alpha: "MAD",
        name: "Moroccan Dirham",
    },
    CurrencyRecord {
        code: CurrencyCode(498),
        alpha: "MDL",
        name: "Moldovan Leu",
    },
    CurrencyRecord {
        code: CurrencyCode(969),
        alpha: "MGA",
        name: "Malagasy Ariary",
    },
    CurrencyRecord {
        code: CurrencyCode(807),
        alpha: "MKD",
        name: "Denar",
    },
    CurrencyRecord {
        code: CurrencyCode(104),
        alpha: "MMK",
        name: "Kyat",
    },
    CurrencyRecord {
        code: CurrencyCode(496),
        alpha: "MNT",
        name: "Tugrik",
    },
    CurrencyRecord {
        code: CurrencyCode(446),
        alpha: "MOP",
        name: "Pataca",
    },
    CurrencyRecord {
        code: CurrencyCode(929),
        alpha: "MRU",
        name: "Ouguiya",
    },
    CurrencyRecord {
        code: CurrencyCode(480),
        alpha: "MUR",
        name: "Mauritius Rupee",
    },
    CurrencyRecord {
        code: CurrencyCode(462),
        alpha: "MVR",
        name: "Rufiyaa",
    },
    CurrencyRecord {
        code: CurrencyCode(454),
        alpha: "MWK",
        name: "Malawi Kwacha",
    },
    CurrencyRecord {
        code: CurrencyCode(484),
        alpha: "MXN",
        name: "Mexican Peso",
    },
    CurrencyRecord {
        code: CurrencyCode(458),
        alpha: "MYR",
        name: "Malaysian Ringgit",
    },
    CurrencyRecord {
        code: CurrencyCode(943),
        alpha: "MZN",
        name: "Mozambique Metical",
    },
    CurrencyRecord {
        code: CurrencyCode(516),
        alpha: "NAD",
        name: "Namibia Dollar",
    },
    CurrencyRecord {
        code: CurrencyCode(566),
        alpha: "NGN",
        name: "Naira",
    },
    CurrencyRecord {
        code: CurrencyCode(558),
        alpha: "NIO",
        name: "Cordoba Oro",
    },
    CurrencyRecord {
        code: CurrencyCode(578),
        alpha: "NOK",
        name: "Norwegian Krone",
    },
    CurrencyRecord {
        code: CurrencyCode(524),
        alpha: "NPR",
        name: "Nepalese Rupee",
    },
    CurrencyRecord {
        code: CurrencyCode(554),
        alpha: "NZD",
        name: "New Zealand Dollar",
    },
    CurrencyRecord {
        code: CurrencyCode(512),
        alpha: "OMR",
        name: "Rial Omani",
    },
    CurrencyRecord {
        code: CurrencyCode(590),
        alpha: "PAB",
        name: "Balboa",
    },
    CurrencyRecord {
        code: CurrencyCode(604),
        alpha: "PEN",
        name: "Sol",
    },
    CurrencyRecord {
        code: CurrencyCode(598),
        alpha: "PGK",
        name: "Kina",
    },
    CurrencyRecord {
        code: CurrencyCode(608),
        alpha: "PHP",
        name: "Philippine Peso",
    },
    CurrencyRecord {
        code: CurrencyCode(586),
        alpha: "PKR",
        name: "Pakistan Rupee",
    },
    CurrencyRecord {
        code: CurrencyCode(985),
        alpha: "PLN",
        name: "Zloty",
    },
    CurrencyRecord {
        code: CurrencyCode(600),
        alpha: "PYG",
        name: "Guarani",
    },
    CurrencyRecord {
        code: CurrencyCode(634),
        alpha: "QAR",
        name: "Qatari Rial",
    },
    CurrencyRecord {
        code: CurrencyCode(946),
        alpha: "RON",
        name: "Romanian Leu",
    },
    CurrencyRecord {
        code: CurrencyCode(941),
        alpha: "RSD",
        name: "Serbian Dinar",
    },
    CurrencyRecord {
        code: CurrencyCode(643),
        alpha: "RUB",
        name: "Russian Ruble",
    },
    CurrencyRecord {
        code: CurrencyCode(646),
        alpha: "RWF",
        name: "Rwanda Franc",
    },
    CurrencyRecord {
        code: CurrencyCode(682),
        alpha: "SAR",
        name: "Saudi Riyal",
    },
    CurrencyRecord {
        code: CurrencyCode(90),
        alpha: "SBD",
        name: "Solomon Islands Dollar",
    },
    CurrencyRecord {
        code: CurrencyCode(690),
        alpha: "SCR",
        name: "Seychelles Rupee",
    },
    CurrencyRecord {
        code: CurrencyCode(938),
        alpha: "SDG",
        name: "Sudanese Pound",
    },
    CurrencyRecord {
        code: CurrencyCode(752),
        alpha: "SEK",
        name: "Swedish Krona",
    },
    CurrencyRecord {
        code: CurrencyCode(702),
        alpha: "SGD",
        name: "Singapore Dollar",
    },
    CurrencyRecord {
        code: CurrencyCode(654),
        alpha: "SHP",
        name: "Saint Helena Pound",
    },
    CurrencyRecord {
        code: CurrencyCode(694),
        alpha: "SLL",
        name: "Leone",
    },
    CurrencyRecord {
        code: CurrencyCode(706),
        alpha: "SOS",
        name: "Somali Shilling",
    },
    CurrencyRecord {
        code: CurrencyCode(968),
        alpha: "SRD",
        name: "Surinam Dollar",
    },
    CurrencyRecord {
        code: CurrencyCode(728),
        alpha: "SSP",
        name: "South Sudanese Pound",
    },
    CurrencyRecord {
        code: CurrencyCode(930),
        alpha: "STN",
        name: "Dobra",
    },
    CurrencyRecord {
        code: CurrencyCode(222),
        alpha: "SVC",
        name: "El Salvador Colon",
    },
    CurrencyRecord {
        code: CurrencyCode(760),
        alpha: "SYP",
        name: "Syrian Pound",
    },
    CurrencyRecord {
        code: CurrencyCode(748),
        alpha: "SZL",
        name: "Lilangeni",
    },
    CurrencyRecord {
        code: CurrencyCode(764),
        alpha: "THB",
        name: "Baht",
    },
    CurrencyRecord {
        code: CurrencyCode(972),
        alpha: "TJS",
        name: "Somoni",
    },
    CurrencyRecord {
        code: CurrencyCode(934),
        alpha: "TMT",
        name: "Turkmenistan New Manat",
    },
    CurrencyRecord {
        code: CurrencyCode(788),
        alpha: "TND",
        name: "Tunisian Dinar",
    },
    CurrencyRecord {
        code: CurrencyCode(776),
        alpha: "TOP",
        name: "Paʻanga",
    },
    CurrencyRecord {
        code: CurrencyCode(949),
        alpha: "TRY",
        name: "Turkish Lira",
    },
    CurrencyRecord {
        code: CurrencyCode(780),
        alpha: "TTD",
        name: "Trinidad and Tobago Dollar",
    },
    CurrencyRecord {
        code: CurrencyCode(901),
        alpha: "TWD",
        name: "New Taiwan Dollar",
    },
    CurrencyRecord {
        code: CurrencyCode(834),
        alpha: "TZS",
        name: "Tanzanian Shilling",
    },
    CurrencyRecord {
        code: CurrencyCode(980),
        alpha: "UAH",
        name: "Hryvnia",
    },
    CurrencyRecord {
        code: CurrencyCode(800),
        alpha: "UGX",
        name: "Uganda Shilling",
    },
    CurrencyRecord {
        code: CurrencyCode(840),
        alpha: "USD",
        name: "US Dollar",
    },
    CurrencyRecord {
        code: CurrencyCode(940),
        alpha: "UYI",
        name: "Uruguay Peso en Unidades Indexadas",
    },
    CurrencyRecord {
        code: CurrencyCode(860),
        alpha: "UZS",
        name: "Uzbekistan Sum",
    },
    CurrencyRecord {
        code: CurrencyCode(928),
        alpha: "VES",
        name: "Bolivar Soberano",
    },
    CurrencyRecord {
        code: CurrencyCode(704),
        alpha: "VND",
        name: "Dong",
    },
    CurrencyRecord {
        code: CurrencyCode(548),
        alpha: "VUV",
        name: "Vatu",
    },
    CurrencyRecord {
        code: CurrencyCode(882),
        alpha: "WST",
        name: "Tala",
    },
    CurrencyRecord {
        code: CurrencyCode(950),
        alpha: "XAF",
        name: "CFA Franc BEAC",
    },
    CurrencyRecord {
        code: CurrencyCode(951),
        alpha: "XCD",
        name: "East Caribbean Dollar",
    },
    CurrencyRecord {
        code: CurrencyCode(952),
        alpha: "XOF",
        name: "CFA Franc BCEAO",
    },
    CurrencyRecord {
        code: CurrencyCode(953),
        alpha: "XPF",
        name: "CFP Franc",
    },
    CurrencyRecord {
        code: CurrencyCode(886),
        alpha: "YER",
        name: "Yemeni Rial",
    },
    CurrencyRecord {
        code: CurrencyCode(890),
        alpha: "YUD",
        name: "Yugoslav Dinar",
    },
    CurrencyRecord {
        code: CurrencyCode(710),
        alpha: "ZAR",
        name: "Rand",
    },
    CurrencyRecord {
        code: CurrencyCode(967),
        alpha: "ZMW",
        name: "Zambian Kwacha",
    },
    CurrencyRecord {
        code: CurrencyCode(932),
        alpha: "ZWL",
        name: "Zimbabwe Dollar",
    },
];
