// Generated from the upstream ISO 3166 / ITU reference dataset.
// Do not edit by hand; regenerate when the dataset is refreshed.

use crate::core::country::CountryCode;

/// Variant spellings, abbreviations, historical names and transliterations.
/// Keys are pre-normalized; Alpha-2/Alpha-3/name keys are derived from the
/// country table at resolver build time and are not repeated here.
pub static ALIAS_VARIANTS: &[(&str, CountryCode)] = &[
    ("AVSTRALIA", CountryCode(36)),
    ("AVSTRALIYA", CountryCode(36)),
    ("AUSTRALIYA", CountryCode(36)),
    ("AUSTRALIEN", CountryCode(36)),
    ("AVSTRIA", CountryCode(40)),
    ("AUSTRIYA", CountryCode(40)),
    ("AVSTRIYA", CountryCode(40)),
    ("OSTERREICH", CountryCode(40)),
    ("OESTERREICH", CountryCode(40)),
    ("AYZERBAIJAN", CountryCode(31)),
    ("AZERBAIDJAN", CountryCode(31)),
    ("AYZERBAIDJAN", CountryCode(31)),
    ("ASERBAIDSCHAN", CountryCode(31)),
    ("ALBANIYA", CountryCode(8)),
    ("ALBANIEN", CountryCode(8)),
    ("ALGERIYA", CountryCode(12)),
    ("ALGERIEN", CountryCode(12)),
    ("AMERICASAMOA", CountryCode(16)),
    ("SAMOAAMERICAN", CountryCode(16)),
    ("SAMOAMERICAN", CountryCode(16)),
    ("SAMOAMERICA", CountryCode(16)),
    ("AMERIKANISCHSAMOA", CountryCode(16)),
    ("ANGUILA", CountryCode(660)),
    ("XEN", CountryCode(826)),
    ("ENG", CountryCode(826)),
    ("ENGLAND", CountryCode(826)),
    ("INGLAND", CountryCode(826)),
    ("ANGOLIA", CountryCode(24)),
    ("ANDORA", CountryCode(20)),
    ("NQ", CountryCode(10)),
    ("ATB", CountryCode(10)),
    ("ATN", CountryCode(10)),
    ("BQAQ", CountryCode(10)),
    ("NQAQ", CountryCode(10)),
    ("ANTARKTICA", CountryCode(10)),
    ("ANTARCTIKA", CountryCode(10)),
    ("ANTARKTIKA", CountryCode(10)),
    ("ANTARCTIC", CountryCode(10)),
    ("ANTARKTIC", CountryCode(10)),
    ("ANTARCTIK", CountryCode(10)),
    ("ANTARKTIK", CountryCode(10)),
    ("ANTARKTIS", CountryCode(10)),
    ("ANTIGUABARBUDA", CountryCode(28)),
    ("ANTIGUA", CountryCode(28)),
    ("ANTIGUAUNDBARBUDA", CountryCode(28)),
    ("AHO", CountryCode(530)),
    ("ANHH", CountryCode(530)),
    ("NETHERLSANTILLES", CountryCode(530)),
    ("NETHERLANDSANTILES", CountryCode(530)),
    ("NETHERLSANTILES", CountryCode(530)),
    ("NIEDERLAENDISCHEANTILLEN", CountryCode(530)),
    ("NIEDERLANDISCHANTILLEN", CountryCode(530)),
    ("UAE", CountryCode(784)),
    ("ARABEMIRATES", CountryCode(784)),
    ("UNITEDEMIRATES", CountryCode(784)),
    ("VEREINIGTEARABISCHEEMIRATE", CountryCode(784)),
    ("ARGENTIN", CountryCode(32)),
    ("RA", CountryCode(32)),
    ("ARGENTINIEN", CountryCode(32)),
    ("ARMENIYA", CountryCode(51)),
    ("ARMENIAN", CountryCode(51)),
    ("ARMENIEN", CountryCode(51)),
    ("AFHANISTAN", CountryCode(4)),
    ("AFGANISTAN", CountryCode(4)),
    ("AFGHANIAN", CountryCode(4)),
    ("AFGANIAN", CountryCode(4)),
    ("AFGHAN", CountryCode(4)),
    ("AFGHANI", CountryCode(4)),
    ("BAGHAMAS", CountryCode(44)),
    ("BAGAMAS", CountryCode(44)),
    ("BAHAMIAN", CountryCode(44)),
    ("BAGAMIAN", CountryCode(44)),
    ("BANGLADEH", CountryCode(50)),
    ("BANHGLADESH", CountryCode(50)),
    ("BANHLADESH", CountryCode(50)),
    ("BANHLADEH", CountryCode(50)),
    ("BAR", CountryCode(52)),
    ("BDS", CountryCode(52)),
    ("BARBODOS", CountryCode(52)),
    ("BAGHRAIN", CountryCode(48)),
    ("BYS", CountryCode(112)),
    ("BYAA", CountryCode(112)),
    ("BELORUS", CountryCode(112)),
    ("BELLARUSSIA", CountryCode(112)),
    ("BELARUSSIA", CountryCode(112)),
    ("BELLORUSSIA", CountryCode(112)),
    ("BELORUSSIA", CountryCode(112)),
    ("BELLARUSSIAN", CountryCode(112)),
    ("BELARUSSIAN", CountryCode(112)),
    ("BELLORUSSIAN", CountryCode(112)),
    ("BELORUSSIAN", CountryCode(112)),
    ("BYELORUSSIAN", CountryCode(112)),
    ("BYELORUSSIA", CountryCode(112)),
    ("BYELORUSSIYA", CountryCode(112)),
    ("WEISSRUSSLAND", CountryCode(112)),
    ("BIZ", CountryCode(84)),
    ("BELGUM", CountryCode(56)),
    ("BELGIEN", CountryCode(56)),
    ("DHY", CountryCode(204)),
    ("DY", CountryCode(204)),
    ("DYBJ", CountryCode(204)),
    ("BERMUDS", CountryCode(60)),
    ("BERMUD", CountryCode(60)),
    ("BULGARIYA", CountryCode(100)),
    ("BULGARY", CountryCode(100)),
    ("BOLGARIA", CountryCode(100)),
    ("BOLGARIYA", CountryCode(100)),
    ("BULGARIEN", CountryCode(100)),
    ("BOLIVIYA", CountryCode(68)),
    ("BOLIVIAN", CountryCode(68)),
    ("BOLIVIAPLURINATIONALSTATEOF", CountryCode(68)),
    ("BOLIVIAPLURINATIONALSTATE", CountryCode(68)),
    ("BOLIVIEN", CountryCode(68)),
    ("BOSNIAHERZEGOVINA", CountryCode(70)),
    ("BOSNIA", CountryCode(70)),
    ("BOSNIEN", CountryCode(70)),
    ("BOSNIENUNDHERZEGOWINA", CountryCode(70)),
    ("BOTSWANNA", CountryCode(72)),
    ("BOTSVANA", CountryCode(72)),
    ("BOTSVANNA", CountryCode(72)),
    ("BRAZILIA", CountryCode(76)),
    ("BRAZILIYA", CountryCode(76)),
    ("BRAZILIAN", CountryCode(76)),
    ("BRASILIEN", CountryCode(76)),
    ("REPUBLICOFBRAZIL", CountryCode(76)),
    ("FEDERATIVEREPUBLICOFBRAZIL", CountryCode(76)),
    ("BRITISHINDIANTERRITORY", CountryCode(86)),
    ("BRITISCHESTERRITORIUM", CountryCode(86)),
    ("BRITISCHESTERRITORIUMIMINDISCHENOZEAN", CountryCode(86)),
    ("BRU", CountryCode(96)),
    ("BRUNEI", CountryCode(96)),
    ("BRUNEY", CountryCode(96)),
    ("HV", CountryCode(854)),
    ("HVO", CountryCode(854)),
    ("BURKINAANDFASO", CountryCode(854)),
    ("BURCINAFASO", CountryCode(854)),
    ("BURCINAANDFASO", CountryCode(854)),
    ("HVBF", CountryCode(854)),
    ("BGHUTAN", CountryCode(64)),
    ("NHB", CountryCode(548)),
    ("NH", CountryCode(548)),
    ("NHVU", CountryCode(548)),
    ("HOLYSEEVATICAN", CountryCode(336)),
    ("HOLYSEE", CountryCode(336)),
    ("VATICAN", CountryCode(336)),
    ("VATICANCITYSTATE", CountryCode(336)),
    ("VATICANSTATE", CountryCode(336)),
    ("HOLYSEEVATIKAN", CountryCode(336)),
    ("VATIKAN", CountryCode(336)),
    ("VATIKANCITYSTATE", CountryCode(336)),
    ("VATIKANSTATE", CountryCode(336)),
    ("HOLYSEEVATIKANCITYSTATE", CountryCode(336)),
    ("VATIKANSTADT", CountryCode(336)),
    ("VATICANCITY", CountryCode(336)),
    ("CITYVATICAN", CountryCode(336)),
    ("DG", CountryCode(826)),
    ("ADN", CountryCode(826)),
    ("DGA", CountryCode(826)),
    ("UNITEDKINDOM", CountryCode(826)),
    ("UK", CountryCode(826)),
    ("GREATBRITAN", CountryCode(826)),
    ("GREATBRITAIN", CountryCode(826)),
    ("NORTHERNIRELAND", CountryCode(826)),
    ("BRITAN", CountryCode(826)),
    ("BRITAIN", CountryCode(826)),
    ("GROSSBRITANNIEN", CountryCode(826)),
    ("VEREINIGTESKONIGREICH", CountryCode(826)),
    ("VEREINIGTESKOENIGREICH", CountryCode(826)),
    ("HUNGAR", CountryCode(348)),
    ("HUNGARI", CountryCode(348)),
    ("VENGRIYA", CountryCode(348)),
    ("VENGRIA", CountryCode(348)),
    ("UNGARN", CountryCode(348)),
    ("VENEZUELLA", CountryCode(862)),
    ("VENECUELA", CountryCode(862)),
    ("VENECUELLA", CountryCode(862)),
    ("YV", CountryCode(862)),
    ("BOLIVARIANREPUBLICOF", CountryCode(862)),
    ("BOLIVARIANREPUBLIC", CountryCode(862)),
    ("REPUBLICOFBOLIVARIAN", CountryCode(862)),
    ("REPUBLICBOLIVARIAN", CountryCode(862)),
    ("BOLIVARIAN", CountryCode(862)),
    ("IVB", CountryCode(92)),
    ("VIRGINISLANDSBRITIH", CountryCode(92)),
    ("VIRGINISLSBRITIH", CountryCode(92)),
    ("VIRGINISLSBRITISH", CountryCode(92)),
    ("VIRGINISLANDSGB", CountryCode(92)),
    ("VIRGINISLANDSUK", CountryCode(92)),
    ("BRITISCHEJUNGFERNINSELN", CountryCode(92)),
    ("BRITISHVIRGINISLANDS", CountryCode(92)),
    ("ISV", CountryCode(850)),
    ("USVIRGINISLANDS", CountryCode(850)),
    ("USVI", CountryCode(850)),
    ("AMERIKANISCHEJUNGFERNINSELN", CountryCode(850)),
    ("TP", CountryCode(626)),
    ("TMP", CountryCode(626)),
    ("TPTL", CountryCode(626)),
    ("TIMORLESTE", CountryCode(626)),
    ("EASTTIMOR", CountryCode(626)),
    ("TIMOR", CountryCode(626)),
    ("TIMORELESTE", CountryCode(626)),
    ("EASTTIMORE", CountryCode(626)),
    ("TIMORE", CountryCode(626)),
    ("TIMORLESTEEASTTIMORE", CountryCode(626)),
    ("OSTTIMOR", CountryCode(626)),
    ("VIE", CountryCode(704)),
    ("VDR", CountryCode(704)),
    ("VD", CountryCode(704)),
    ("VETNAM", CountryCode(704)),
    ("VIETNAME", CountryCode(704)),
    ("VETNAME", CountryCode(704)),
    ("VDVN", CountryCode(704)),
    ("CONGHOAXAHOICHUNGHIAVIETNAM", CountryCode(704)),
    ("CHUNGHIAVIETNAM", CountryCode(704)),
    ("NGHIAVIETNAM", CountryCode(704)),
    ("GABUN", CountryCode(266)),
    ("GAITI", CountryCode(332)),
    ("WAG", CountryCode(270)),
    ("GAMBIYA", CountryCode(270)),
    ("HANA", CountryCode(288)),
    ("GUADELUPE", CountryCode(312)),
    ("GUADELOOPE", CountryCode(312)),
    ("GUADELOUPA", CountryCode(312)),
    ("GUADELUPA", CountryCode(312)),
    ("GUADELOOPA", CountryCode(312)),
    ("GCA", CountryCode(320)),
    ("GUINEYA", CountryCode(324)),
    ("GBS", CountryCode(624)),
    ("DD", CountryCode(276)),
    ("DDR", CountryCode(276)),
    ("GER", CountryCode(276)),
    ("GERMANIYA", CountryCode(276)),
    ("DEUTSCHLAND", CountryCode(276)),
    ("DEUTSCH", CountryCode(276)),
    ("DDDE", CountryCode(276)),
    ("GBZ", CountryCode(292)),
    ("HIBRALTAR", CountryCode(292)),
    ("GONDURAS", CountryCode(340)),
    ("HONGKONG", CountryCode(344)),
    ("HONKONG", CountryCode(344)),
    ("GRINADA", CountryCode(308)),
    ("WG", CountryCode(308)),
    ("GRONLAND", CountryCode(304)),
    ("GROENLAND", CountryCode(304)),
    ("GRECE", CountryCode(300)),
    ("GRIECHENLAND", CountryCode(300)),
    ("GRECIYA", CountryCode(300)),
    ("GEORGIYA", CountryCode(268)),
    ("GEORGIEN", CountryCode(268)),
    ("GRUZIYA", CountryCode(268)),
    ("DANMARK", CountryCode(208)),
    ("DANEMARK", CountryCode(208)),
    ("DAENEMARK", CountryCode(208)),
    ("KONGERIGETDANMARK", CountryCode(208)),
    ("DANMARKKONGERIGET", CountryCode(208)),
    ("DANIYA", CountryCode(208)),
    ("ZRE", CountryCode(180)),
    ("ZAR", CountryCode(180)),
    ("ZR", CountryCode(180)),
    ("ZRCD", CountryCode(180)),
    ("CONGODEMOCRATICREPUBLIC", CountryCode(180)),
    ("CONGODEMOCRATICREP", CountryCode(180)),
    ("CONGODEMOCRATIC", CountryCode(180)),
    ("CONGOTHEDEMOCRATICREPUBLICOF", CountryCode(180)),
    ("CONGOTHEDEMOCRATICREPUBLIC", CountryCode(180)),
    ("KONGODEMOCRACTICREPUBLIC", CountryCode(180)),
    ("KONGODEMOCRATICREP", CountryCode(180)),
    ("KONGODEMOCRATIC", CountryCode(180)),
    ("KONGOTHEDEMOCRATICREPUBLICOF", CountryCode(180)),
    ("ZAIRE", CountryCode(180)),
    ("ZAIR", CountryCode(180)),
    ("DEMOKRATISCHEREPUBLIKKONGO", CountryCode(180)),
    ("CONGOREPUBLIC", CountryCode(180)),
    ("KONGOREPUBLIC", CountryCode(180)),
    ("REPUBLICOFCONGO", CountryCode(180)),
    ("REPUBLICOFKONGO", CountryCode(180)),
    ("CONGOTHEDEMOCRATICREPUBLICOFTHE", CountryCode(180)),
    ("DRCONGO", CountryCode(180)),
    ("AFI", CountryCode(262)),
    ("AIDJ", CountryCode(262)),
    ("DSCHIBUTI", CountryCode(262)),
    ("DOMINIKA", CountryCode(212)),
    ("DOMINICANA", CountryCode(214)),
    ("DOMINIKANA", CountryCode(214)),
    ("DOMINIKANISCHEREPUBLIK", CountryCode(214)),
    ("AGYPTEN", CountryCode(818)),
    ("AEGYPTEN", CountryCode(818)),
    ("RNR", CountryCode(894)),
    ("SAMBIA", CountryCode(894)),
    ("WESTSAHARA", CountryCode(732)),
    ("ZIM", CountryCode(716)),
    ("RHO", CountryCode(716)),
    ("RSR", CountryCode(716)),
    ("ZIMBABVE", CountryCode(716)),
    ("RH", CountryCode(716)),
    ("RHZW", CountryCode(716)),
    ("SIMBABWE", CountryCode(716)),
    ("IZRAIL", CountryCode(376)),
    ("ISRAIL", CountryCode(376)),
    ("ISRAILIAN", CountryCode(376)),
    ("IZRAILEN", CountryCode(376)),
    ("INDIAN", CountryCode(356)),
    ("INDIYA", CountryCode(356)),
    ("SKM", CountryCode(356)),
    ("SKIN", CountryCode(356)),
    ("INDIEN", CountryCode(356)),
    ("INA", CountryCode(360)),
    ("REPUBLICOFINDONESIA", CountryCode(360)),
    ("RI", CountryCode(360)),
    ("INDONESIEN", CountryCode(360)),
    ("HKJ", CountryCode(400)),
    ("JORDANIEN", CountryCode(400)),
    ("IRAK", CountryCode(368)),
    ("IRI", CountryCode(364)),
    ("IRAN", CountryCode(364)),
    ("IRANISLAMICREPUBLIC", CountryCode(364)),
    ("IRANIAN", CountryCode(364)),
    ("IRLAND", CountryCode(372)),
    ("ISLAND", CountryCode(352)),
    ("EA", CountryCode(724)),
    ("IC", CountryCode(724)),
    ("SPANIEN", CountryCode(724)),
    ("ISPANIA", CountryCode(724)),
    ("ITALIYA", CountryCode(380)),
    ("ITALIEN", CountryCode(380)),
    ("YMD", CountryCode(887)),
    ("IEMEN", CountryCode(887)),
    ("YD", CountryCode(887)),
    ("YDYE", CountryCode(887)),
    ("JEMEN", CountryCode(887)),
    ("KAZAHSTAN", CountryCode(398)),
    ("KASACHSTAN", CountryCode(398)),
    ("KAYMANISLANDS", CountryCode(136)),
    ("KAIMANINSELN", CountryCode(136)),
    ("KAMBODSCHA", CountryCode(116)),
    ("KAMERUN", CountryCode(120)),
    ("CDN", CountryCode(124)),
    ("KANADA", CountryCode(124)),
    ("KATAR", CountryCode(634)),
    ("EAK", CountryCode(404)),
    ("CIPRUS", CountryCode(196)),
    ("ZYPERN", CountryCode(196)),
    ("REPUBLIKZYPERN", CountryCode(196)),
    ("CT", CountryCode(296)),
    ("CTE", CountryCode(296)),
    ("CTKI", CountryCode(296)),
    ("CIRIBATI", CountryCode(296)),
    ("KIRIBATY", CountryCode(296)),
    ("CIRIBATY", CountryCode(296)),
    ("CHINESE", CountryCode(156)),
    ("RC", CountryCode(156)),
    ("KITAY", CountryCode(156)),
    ("KEELING", CountryCode(166)),
    ("COCOS", CountryCode(166)),
    ("COCOSISLANDS", CountryCode(166)),
    ("KOKOSISLANDS", CountryCode(166)),
    ("KOKOSINSELN", CountryCode(166)),
    ("KOLUMBIEN", CountryCode(170)),
    ("KOMOREN", CountryCode(174)),
    ("RCB", CountryCode(178)),
    ("KONGO", CountryCode(178)),
    ("KOREADEMOCRATICPEOPLESREPUBLICOF", CountryCode(408)),
    ("KOREADEMOCRATICPEOPLESREPUBLIC", CountryCode(408)),
    ("KOREANORTH", CountryCode(408)),
    ("NORTHKOREA", CountryCode(408)),
    ("NORDKOREA", CountryCode(408)),
    ("ROK", CountryCode(410)),
    ("KOREA", CountryCode(410)),
    ("KOREYA", CountryCode(410)),
    ("SOUTHKOREA", CountryCode(410)),
    ("KOREAREPUBLICOF", CountryCode(410)),
    ("KOREAREPUBLIC", CountryCode(410)),
    ("KOREAREPOF", CountryCode(410)),
    ("SUDKOREA", CountryCode(410)),
    ("SUEDKOREA", CountryCode(410)),
    ("KOSTARIKA", CountryCode(188)),
    ("KOSTARICA", CountryCode(188)),
    ("COSTARIKA", CountryCode(188)),
    ("IVORYCOAST", CountryCode(384)),
    ("ELFENBEINKUSTE", CountryCode(384)),
    ("ELFENBEINKUESTE", CountryCode(384)),
    ("CUBAREPUBLIC", CountryCode(192)),
    ("REPUBLICCUBA", CountryCode(192)),
    ("KUBA", CountryCode(192)),
    ("KIRGISISTAN", CountryCode(417)),
    ("LAOS", CountryCode(418)),
    ("LAODEMOCRATICPEOPLESREPUBLIC", CountryCode(418)),
    ("LAOSDEMOCRATICPEOPLESREPUBLIC", CountryCode(418)),
    ("LAT", CountryCode(428)),
    ("LATVIYA", CountryCode(428)),
    ("LETTLAND", CountryCode(428)),
    ("RL", CountryCode(422)),
    ("LIBANON", CountryCode(422)),
    ("LBA", CountryCode(434)),
    ("LIBYA", CountryCode(434)),
    ("LIVIA", CountryCode(434)),
    ("LIVIYA", CountryCode(434)),
    ("LIBYAN", CountryCode(434)),
    ("LF", CountryCode(434)),
    ("LIBYEN", CountryCode(434)),
    ("LITAUEN", CountryCode(440)),
    ("LITVA", CountryCode(440)),
    ("LIEHTENSTEIN", CountryCode(438)),
    ("FL", CountryCode(438)),
    ("LUXEMBURG", CountryCode(442)),
    ("MAURETANIEN", CountryCode(478)),
    ("RM", CountryCode(450)),
    ("MADAGASKAR", CountryCode(450)),
    ("MACAUCHINA", CountryCode(446)),
    ("MACAU", CountryCode(446)),
    ("MACAO", CountryCode(446)),
    ("MACAUSAR", CountryCode(446)),
    ("MACAOSAR", CountryCode(446)),
    ("MACEDONIA", CountryCode(807)),
    ("MACEDONIAFYRO", CountryCode(807)),
    ("MACEDONIATHEFORMERYUGOSLAVREPUBLICOF", CountryCode(807)),
    ("MACEDONIATHEFORMERYUGOSLAV", CountryCode(807)),
    ("MACEDONIATHEFORMERYUGOSLAVREPUBLIC", CountryCode(807)),
    ("REPUBLICOFNORTHMACEDONIA", CountryCode(807)),
    ("REPUBLICOFMACEDONIA", CountryCode(807)),
    ("NORTHMACEDONIA", CountryCode(807)),
    ("MACEDONIANORTH", CountryCode(807)),
    ("NORDMAZEDONIEN", CountryCode(807)),
    ("THEFORMERYUGOSLAVREPUBLICOF", CountryCode(807)),
    ("THEFORMERYUGOSLAVREPUBLIC", CountryCode(807)),
    ("FORMERYUGOSLAVREPUBLICOF", CountryCode(807)),
    ("FORMERYUGOSLAVREPUBLIC", CountryCode(807)),
    ("MACEDONIAFORMERYUGOSLAVREPUBLICOF", CountryCode(807)),
    ("MACEDONIAFORMERYUGOSLAVREPUBLIC", CountryCode(807)),
    ("YUGOSLAVREPUBLIC", CountryCode(807)),
    ("MAW", CountryCode(454)),
    ("MALAVI", CountryCode(454)),
    ("MAL", CountryCode(458)),
    ("MALAYSIYA", CountryCode(458)),
    ("RMM", CountryCode(466)),
    ("MALEDIVEN", CountryCode(462)),
    ("NORTHERNMARIANAIS", CountryCode(580)),
    ("MARIANAISLANDS", CountryCode(580)),
    ("NORDLICHEMARIANEN", CountryCode(580)),
    ("NOERDLICHEMARIANEN", CountryCode(580)),
    ("MOROCO", CountryCode(504)),
    ("MOROKO", CountryCode(504)),
    ("MAROKKO", CountryCode(504)),
    ("MARSHALL", CountryCode(584)),
    ("REPUBLICOFTHEMARSHALLISLANDS", CountryCode(584)),
    ("MARSHALLINSELN", CountryCode(584)),
    ("MEXIKO", CountryCode(484)),
    ("MICRONESIA", CountryCode(583)),
    ("MICRONESIAFEDST", CountryCode(583)),
    ("MIKRONESIEN", CountryCode(583)),
    ("FEDERATEDSTATESOFMICRONESIA", CountryCode(583)),
    ("STATESOFMICRONESIA", CountryCode(583)),
    ("FEDERATEDSTATESMICRONESIA", CountryCode(583)),
    ("STATESMICRONESIA", CountryCode(583)),
    ("MOZAMBIQ", CountryCode(508)),
    ("MOSAMBIK", CountryCode(508)),
    ("MOLDOVA", CountryCode(498)),
    ("MOLDAVIA", CountryCode(498)),
    ("MOLDAVIAN", CountryCode(498)),
    ("MOLDAVIYA", CountryCode(498)),
    ("REPUBLIKMOLDOVA", CountryCode(498)),
    ("REPUBLICOFMOLDOVA", CountryCode(498)),
    ("MOLDOVAREPUBLIC", CountryCode(498)),
    ("MONAKO", CountryCode(492)),
    ("MONGOLIAN", CountryCode(496)),
    ("MONGOLIYA", CountryCode(496)),
    ("MONGOLEI", CountryCode(496)),
    ("BU", CountryCode(104)),
    ("BUMM", CountryCode(104)),
    ("BURMA", CountryCode(104)),
    ("NAMIBIAN", CountryCode(516)),
    ("NAMIBIYA", CountryCode(516)),
    ("NAMIBIE", CountryCode(516)),
    ("NEPALI", CountryCode(524)),
    ("NIGGER", CountryCode(562)),
    ("RN", CountryCode(562)),
    ("NGR", CountryCode(566)),
    ("WAN", CountryCode(566)),
    ("NIGERIAN", CountryCode(566)),
    ("NIGGERIAN", CountryCode(566)),
    ("NIGERIYA", CountryCode(566)),
    ("NIGGERIA", CountryCode(566)),
    ("NIGGERIYA", CountryCode(566)),
    ("NED", CountryCode(528)),
    ("NETHERLAND", CountryCode(528)),
    ("HOLLAND", CountryCode(528)),
    ("HOLLANDIA", CountryCode(528)),
    ("HOLLANDIYA", CountryCode(528)),
    ("NIEDERLANDE", CountryCode(528)),
    ("HOLAND", CountryCode(528)),
    ("HOLANDIA", CountryCode(528)),
    ("HOLANDIYA", CountryCode(528)),
    ("NEWZELANDIA", CountryCode(554)),
    ("NEWZELAND", CountryCode(554)),
    ("NEUSEELAND", CountryCode(554)),
    ("NEWCALEDONIYA", CountryCode(540)),
    ("NEUKALEDONIEN", CountryCode(540)),
    ("NORWEGEN", CountryCode(578)),
    ("BOUVET", CountryCode(74)),
    ("BOUVETE", CountryCode(74)),
    ("ISLANDOFBOUVET", CountryCode(74)),
    ("BOUVETINSEL", CountryCode(74)),
    ("GBM", CountryCode(833)),
    ("NORFOLK", CountryCode(574)),
    ("NORFOLCISLAND", CountryCode(574)),
    ("NORFOLC", CountryCode(574)),
    ("NORFOLKINSEL", CountryCode(574)),
    ("THEPITCAIRN", CountryCode(612)),
    ("PITCAIRNISLANDS", CountryCode(612)),
    ("THEPITCAIRNISLANDS", CountryCode(612)),
    ("DUCIEANDOENOISLANDS", CountryCode(612)),
    ("DUCIEANDOENO", CountryCode(612)),
    ("PITCAIRNINSELN", CountryCode(612)),
    ("TERRITORYOFCHRISTMASISLAND", CountryCode(162)),
    ("WEIHNACHTSINSEL", CountryCode(162)),
    ("TA", CountryCode(654)),
    ("TAA", CountryCode(654)),
    ("ASC", CountryCode(654)),
    ("SAINTELENA", CountryCode(654)),
    ("STHELENA", CountryCode(654)),
    ("STELENA", CountryCode(654)),
    ("TRISTAN", CountryCode(654)),
    ("ASCENSIONANDTRISTANDACUNHA", CountryCode(654)),
    ("ASCENSIONTRISTANDACUNHA", CountryCode(654)),
    ("TRISTANDACUNHA", CountryCode(654)),
    ("SANKTHELENA", CountryCode(654)),
    ("WALLISFUTUNAISLANDS", CountryCode(876)),
    ("WALLISANDFUTUNA", CountryCode(876)),
    ("WALLISFUTUNA", CountryCode(876)),
    ("WALLISUNDFUTUNA", CountryCode(876)),
    ("HEARDISLAND", CountryCode(334)),
    ("HEARDUNDMCDONALDINSELN", CountryCode(334)),
    ("HEARDANDMCDONALDISLANDS", CountryCode(334)),
    ("KAPVERDE", CountryCode(132)),
    ("CABOVERDE", CountryCode(132)),
    ("COOKINSELN", CountryCode(184)),
    ("SVALBARD", CountryCode(744)),
    ("SVALBARDUNDJANMAYEN", CountryCode(744)),
    ("SVALBARDANDJANMAYEN", CountryCode(744)),
    ("TURKSANDCAICOSIS", CountryCode(796)),
    ("CAICOSISLANDS", CountryCode(796)),
    ("CACOSISLANDS", CountryCode(796)),
    ("TURKSUNDCACIOINSELN", CountryCode(796)),
    ("MINOROUTLYINGISLANDS", CountryCode(581)),
    ("MINOROUTLYING", CountryCode(581)),
    ("USMI", CountryCode(581)),
    ("JT", CountryCode(581)),
    ("JTN", CountryCode(581)),
    ("JTUM", CountryCode(581)),
    ("MI", CountryCode(581)),
    ("MID", CountryCode(581)),
    ("MIUM", CountryCode(581)),
    ("PU", CountryCode(581)),
    ("PUS", CountryCode(581)),
    ("PUUM", CountryCode(581)),
    ("WK", CountryCode(581)),
    ("WAK", CountryCode(581)),
    ("WKUM", CountryCode(581)),
    ("KLEINEINSELBESITZUNGENDERVEREINIGTENSTAATEN", CountryCode(581)),
    ("USOUTLYINGISLANDS", CountryCode(581)),
    ("PACISTAN", CountryCode(586)),
    ("PLE", CountryCode(275)),
    ("PALESTINE", CountryCode(275)),
    ("PALESTINA", CountryCode(275)),
    ("PALESTINIAN", CountryCode(275)),
    ("PALESTINIANTERRITORY", CountryCode(275)),
    ("PALASTINA", CountryCode(275)),
    ("PALAESTINA", CountryCode(275)),
    ("OCCUPIEDPALESTINIANTERRITORY", CountryCode(275)),
    ("PCZ", CountryCode(591)),
    ("PANAMIAN", CountryCode(591)),
    ("PANAM", CountryCode(591)),
    ("PZ", CountryCode(591)),
    ("PZPA", CountryCode(591)),
    ("PAPUA", CountryCode(598)),
    ("PAPUANEUGUINEA", CountryCode(598)),
    ("NEWGUINEA", CountryCode(598)),
    ("NEUGUINEA", CountryCode(598)),
    ("POLSKI", CountryCode(616)),
    ("POLSHA", CountryCode(616)),
    ("POLEN", CountryCode(616)),
    ("PORTUGALIAN", CountryCode(620)),
    ("PORTUGALIYA", CountryCode(620)),
    ("PUERTORIKO", CountryCode(630)),
    ("SUN", CountryCode(643)),
    ("RUSSIA", CountryCode(643)),
    ("RUSSO", CountryCode(643)),
    ("RUSSISH", CountryCode(643)),
    ("RUSSLAND", CountryCode(643)),
    ("RUSLAND", CountryCode(643)),
    ("RUSIA", CountryCode(643)),
    ("ROSSIA", CountryCode(643)),
    ("ROSSIYA", CountryCode(643)),
    ("RUSSIAN", CountryCode(643)),
    ("USSR", CountryCode(643)),
    ("RUANDA", CountryCode(646)),
    ("RUWANDA", CountryCode(646)),
    ("ROM", CountryCode(642)),
    ("RUMINIA", CountryCode(642)),
    ("RUMINIYA", CountryCode(642)),
    ("RUMANIEN", CountryCode(642)),
    ("RUMAENIEN", CountryCode(642)),
    ("ESA", CountryCode(222)),
    ("RSM", CountryCode(674)),
    ("SAOTOME", CountryCode(678)),
    ("SAOTOMEUNDPRINCIPE", CountryCode(678)),
    ("SAUDI", CountryCode(682)),
    ("SAUDIARABIEN", CountryCode(682)),
    ("SWASILAND", CountryCode(748)),
    ("ESWATINI", CountryCode(748)),
    ("KINGDOMOFESWATINI", CountryCode(748)),
    ("KINGDOMESWATINI", CountryCode(748)),
    ("SVAZILEND", CountryCode(748)),
    ("SEYCHELLEN", CountryCode(690)),
    ("SAINTPIERRE", CountryCode(666)),
    ("STPIERREANDMIQUELON", CountryCode(666)),
    ("STPIERRE", CountryCode(666)),
    ("SANKTPIERRE", CountryCode(666)),
    ("SANKTPIERREUNDMIQUELON", CountryCode(666)),
    ("SAINTVINCENT", CountryCode(670)),
    ("STVINCENTANDTHEGRENADINES", CountryCode(670)),
    ("STVINCENT", CountryCode(670)),
    ("WV", CountryCode(670)),
    ("STVINCENTUNDDIEGRENADINEN", CountryCode(670)),
    ("STVINCENTANDGRENADINES", CountryCode(670)),
    ("SAINTKITTSNEVIS", CountryCode(659)),
    ("SAINTKITTS", CountryCode(659)),
    ("STKITTSANDNEVIS", CountryCode(659)),
    ("STKITTSNEVIS", CountryCode(659)),
    ("STKITTS", CountryCode(659)),
    ("SANKTKITTSUNDNEVIS", CountryCode(659)),
    ("STLUCIA", CountryCode(662)),
    ("LUCIA", CountryCode(662)),
    ("WL", CountryCode(662)),
    ("SINGPAORE", CountryCode(702)),
    ("SINGAPORECITY", CountryCode(702)),
    ("SINGAPOUR", CountryCode(702)),
    ("SINGAPURA", CountryCode(702)),
    ("SINGAPUR", CountryCode(702)),
    ("SYRIA", CountryCode(760)),
    ("SYRIAN", CountryCode(760)),
    ("SYRIEN", CountryCode(760)),
    ("CSHH", CountryCode(703)),
    ("SLOVAK", CountryCode(703)),
    ("SLOVAKIYA", CountryCode(703)),
    ("SLOVACIA", CountryCode(703)),
    ("SLOVAC", CountryCode(703)),
    ("SLOVACIYA", CountryCode(703)),
    ("SLOWAKEI", CountryCode(703)),
    ("SLO", CountryCode(705)),
    ("SLOVENIYA", CountryCode(705)),
    ("SLOWENIEN", CountryCode(705)),
    ("UNITEDSTATESOFAMERICA", CountryCode(840)),
    ("USOFAMERICA", CountryCode(840)),
    ("USAMERICA", CountryCode(840)),
    ("VEREINIGTESTAATENVONAMERIKA", CountryCode(840)),
    ("SOLOMON", CountryCode(90)),
    ("SALOMONEN", CountryCode(90)),
    ("SOMALI", CountryCode(706)),
    ("SUDANE", CountryCode(729)),
    ("UMHURIYYATASSUDAN", CountryCode(729)),
    ("جمهوريةالسودان", CountryCode(729)),
    ("السودان", CountryCode(729)),
    ("SME", CountryCode(740)),
    ("SURINAM", CountryCode(740)),
    ("WAL", CountryCode(694)),
    ("SIERRALEON", CountryCode(694)),
    ("SIERALEONE", CountryCode(694)),
    ("SIERALEON", CountryCode(694)),
    ("TADJIKISTAN", CountryCode(762)),
    ("TADSCHIKISTAN", CountryCode(762)),
    ("TPE", CountryCode(158)),
    ("TAIWAN", CountryCode(158)),
    ("TAIWANIAN", CountryCode(158)),
    ("PROVINCEOFCHINA", CountryCode(158)),
    ("PROVINCECHINA", CountryCode(158)),
    ("TAILAND", CountryCode(764)),
    ("THAI", CountryCode(764)),
    ("THAYLAND", CountryCode(764)),
    ("TAYLAND", CountryCode(764)),
    ("EAT", CountryCode(834)),
    ("EAZ", CountryCode(834)),
    ("TANZANIA", CountryCode(834)),
    ("TANZANIYA", CountryCode(834)),
    ("TANSANIA", CountryCode(834)),
    ("TANZANIAUNITEDREPUBLIC", CountryCode(834)),
    ("REPUBLICOFTANZANIA", CountryCode(834)),
    ("TANZANIAREPUBLIC", CountryCode(834)),
    ("TRINIDAD", CountryCode(780)),
    ("TRINADUNDTOBAGO", CountryCode(780)),
    ("TUNESIEN", CountryCode(788)),
    ("TMN", CountryCode(795)),
    ("TURKMENISTON", CountryCode(795)),
    ("TURKMENI", CountryCode(795)),
    ("TURKMENIA", CountryCode(795)),
    ("TURKMENIYA", CountryCode(795)),
    ("TURCIA", CountryCode(792)),
    ("TURKISH", CountryCode(792)),
    ("TURKEI", CountryCode(792)),
    ("TUERKEI", CountryCode(792)),
    ("TURKIYE", CountryCode(792)),
    ("REPUBLICOFTURKIYE", CountryCode(792)),
    ("TURKIYEREPUBLICOF", CountryCode(792)),
    ("TURKIYEREPUBLIC", CountryCode(792)),
    ("REPUBLICTURKIYE", CountryCode(792)),
    ("EAU", CountryCode(800)),
    ("UZBEKISTON", CountryCode(860)),
    ("UKRAINA", CountryCode(804)),
    ("URUGWAY", CountryCode(858)),
    ("FAROE", CountryCode(234)),
    ("FAROER", CountryCode(234)),
    ("FAEROERER", CountryCode(234)),
    ("FIDSCHI", CountryCode(242)),
    ("PHI", CountryCode(608)),
    ("PHILIPINES", CountryCode(608)),
    ("PI", CountryCode(608)),
    ("RP", CountryCode(608)),
    ("PHILIPPINEN", CountryCode(608)),
    ("SF", CountryCode(246)),
    ("FINNISH", CountryCode(246)),
    ("FINNLAND", CountryCode(246)),
    ("MALVINAS", CountryCode(238)),
    ("FALKLANDISLANDS", CountryCode(238)),
    ("FALKLAND", CountryCode(238)),
    ("FALKLANDINSELN", CountryCode(238)),
    ("CP", CountryCode(250)),
    ("FX", CountryCode(250)),
    ("FXX", CountryCode(250)),
    ("CPT", CountryCode(250)),
    ("FXFR", CountryCode(250)),
    ("FRENCH", CountryCode(250)),
    ("FRANKREICH", CountryCode(250)),
    ("GUIANA", CountryCode(254)),
    ("FRANZOSISCHGUYANA", CountryCode(254)),
    ("FRANZOESISCHGUYANA", CountryCode(254)),
    ("POLYNESIA", CountryCode(258)),
    ("FRANZOSISCHPOLYNESIEN", CountryCode(258)),
    ("FRANZOESISCHPOLYNESIEN", CountryCode(258)),
    ("SOUTHERNTERRITORIESFRENCH", CountryCode(260)),
    ("FRANZOSISCHESUDUNDANTARKTISGEBIETE", CountryCode(260)),
    ("FRANZOESISCHESUEDUNDANTARKTISGEBIETE", CountryCode(260)),
    ("CRO", CountryCode(191)),
    ("KROATIA", CountryCode(191)),
    ("KROATIEN", CountryCode(191)),
    ("CTA", CountryCode(140)),
    ("RCA", CountryCode(140)),
    ("CENTRALAFRICANREP", CountryCode(140)),
    ("CENTRALAFRICAN", CountryCode(140)),
    ("ZENTRALAFRIKA", CountryCode(140)),
    ("TSCHAD", CountryCode(148)),
    ("CZECHIYA", CountryCode(203)),
    ("CZECHREPUBLIC", CountryCode(203)),
    ("REPUBLICOFCZECH", CountryCode(203)),
    ("CZECH", CountryCode(203)),
    ("TSCHECHIEN", CountryCode(203)),
    ("CHEHIA", CountryCode(203)),
    ("CHEHIYA", CountryCode(203)),
    ("RCH", CountryCode(152)),
    ("CHILI", CountryCode(152)),
    ("CHILLE", CountryCode(152)),
    ("SWISS", CountryCode(756)),
    ("SCHWEIZ", CountryCode(756)),
    ("SUISSE", CountryCode(756)),
    ("SVIZZERA", CountryCode(756)),
    ("SVIZRA", CountryCode(756)),
    ("HELVETIA", CountryCode(756)),
    ("SHVEYCARIA", CountryCode(756)),
    ("SHVEYCARIYA", CountryCode(756)),
    ("SCHWEDEN", CountryCode(752)),
    ("SHWEDEN", CountryCode(752)),
    ("SHVECIA", CountryCode(752)),
    ("SHVECIYA", CountryCode(752)),
    ("EQG", CountryCode(226)),
    ("GEQ", CountryCode(226)),
    ("AQUATORIALGUINEA", CountryCode(226)),
    ("AEQUATORIALGUINEA", CountryCode(226)),
    ("EW", CountryCode(233)),
    ("ESTLAND", CountryCode(233)),
    ("ATHOPIEN", CountryCode(231)),
    ("AETHOPIEN", CountryCode(231)),
    ("SUDAFRIKA", CountryCode(710)),
    ("SUEDAFRIKA", CountryCode(710)),
    ("UGOSLAVIA", CountryCode(891)),
    ("YUGOSLAVIYA", CountryCode(891)),
    ("UGOSLAVIYA", CountryCode(891)),
    ("SERBIAANDMONTENEGRO", CountryCode(891)),
    ("CS", CountryCode(891)),
    ("SCG", CountryCode(891)),
    ("JUGOSLAWIEN", CountryCode(891)),
    ("SOUTHGEORGIAANDTHESOUTHSANDWICH", CountryCode(239)),
    ("SOUTHGEORGIATHESOUTHSWICHISLANDS", CountryCode(239)),
    ("SOUTHGEORGIA", CountryCode(239)),
    ("SUDGEORGIEN", CountryCode(239)),
    ("SUEDGEORGIEN", CountryCode(239)),
    ("JAMAIKA", CountryCode(388)),
    ("YAMAICA", CountryCode(388)),
    ("YAMAIKA", CountryCode(388)),
    ("JA", CountryCode(388)),
    ("STBARTHELEMY", CountryCode(652)),
    ("SAINTMAARTEN", CountryCode(534)),
    ("SINTMAARTEN", CountryCode(534)),
    ("STMAARTEN", CountryCode(534)),
    ("CSXX", CountryCode(688)),
    ("SERBIYA", CountryCode(688)),
    ("SERBIEN", CountryCode(688)),
    ("ISLANDSALAND", CountryCode(248)),
    ("ALAND", CountryCode(248)),
    ("BONAIRE", CountryCode(535)),
    ("BONAIR", CountryCode(535)),
    ("BONEIRU", CountryCode(535)),
    ("BONAIRESINTEUSTATIUSSABA", CountryCode(535)),
    ("BONAIRESTEUSTANDSABA", CountryCode(535)),
    ("BONAIRESTEUSTSABA", CountryCode(535)),
    ("SINTEUSTATIUSANDSABA", CountryCode(535)),
    ("SINTEUSTATIUS", CountryCode(535)),
    ("CARIBBEANNETHERLANDS", CountryCode(535)),
    ("GBA", CountryCode(831)),
    ("GBG", CountryCode(831)),
    ("GBJ", CountryCode(832)),
    ("JERSIEY", CountryCode(832)),
    ("CURAQAO", CountryCode(531)),
    ("CURAKAO", CountryCode(531)),
    ("KURACAO", CountryCode(531)),
    ("KURAKAO", CountryCode(531)),
    ("STMARTINFRENCH", CountryCode(663)),
    ("SANKTMARTIN", CountryCode(663)),
    ("SAINTMARTIN", CountryCode(663)),
    ("SOUTHSUDANE", CountryCode(728)),
    ("REPUBLICOFSOUTHSUDAN", CountryCode(728)),
    ("SOUTHSUDANREPUBLICOF", CountryCode(728)),
    ("SOUTHSUDANREPUBLIC", CountryCode(728)),
    ("PAGUOTTHUDAN", CountryCode(728)),
    ("SUDSUDAN", CountryCode(728)),
    ("SUEDSUDAN", CountryCode(728)),
    ("XKS", CountryCode(900)),
    ("KOS", CountryCode(900)),
    ("COSOVO", CountryCode(900)),
    ("КОСОВО", CountryCode(900)),
    ("KOSOVES", CountryCode(900)),
    ("РЕПУБЛИКАКОСОВО", CountryCode(900)),
    ("REPUBLIKAKOSOVO", CountryCode(900)),
    ("REPUBLIKACOSOVO", CountryCode(900)),
    ("REPUBLIKAKOSOVES", CountryCode(900)),
    ("REPUBLICAKOSOVO", CountryCode(900)),
    ("REPUBLICACOSOVO", CountryCode(900)),
    ("REPUBLICAKOSOVES", CountryCode(900)),
    ("KOSOVOREPUBLIC", CountryCode(900)),
    ("COSOVOREPUBLIC", CountryCode(900)),
    ("KOSOVESREPUBLIC", CountryCode(900)),
    ("XX", CountryCode(998)),
    ("NON", CountryCode(998)),
    ("NICHT", CountryCode(998)),
    ("NICHTS", CountryCode(998)),
    ("UIFN", CountryCode(999800)),
    ("TOLLFREEPHONE", CountryCode(999800)),
    ("MMS", CountryCode(999875)),
    ("MARITIMEMOBILESERVICES", CountryCode(999875)),
    ("MARITIMEMOBILE", CountryCode(999875)),
    ("MARITIME", CountryCode(999875)),
    ("UNIVERSALPERSONALTELECOMMUNICATIONSSERVICE", CountryCode(999878)),
    ("UNIVERSALPERSONALTELECOMMUNICATIONS", CountryCode(999878)),
    ("UNIVERSALPERSONALTELECOMMUNICATION", CountryCode(999878)),
    ("NCP", CountryCode(999879)),
    ("NONCOMMERCIALPURPOSES", CountryCode(999879)),
    ("NATIONALNONCOMMERCIAL", CountryCode(999879)),
    ("NONCOMMERCIAL", CountryCode(999879)),
    ("GMSS", CountryCode(999881)),
    ("GLOBALMOBILESATELITESYSTEM", CountryCode(999881)),
    ("GLOBALMOBILESATELLITE", CountryCode(999881)),
    ("GLOBALMOBILESATELITE", CountryCode(999881)),
    ("INTERNATIONALNETWORKSSERVICE", CountryCode(999882)),
    ("INTERNATIONALNETWORKSSERVICES", CountryCode(999882)),
    ("DISASTER", CountryCode(999888)),
    ("IPRS", CountryCode(999979)),
    ("PREMIUMRATESERVICE", CountryCode(999979)),
    ("INTERNATIONALPREMIUMRATESERVICES", CountryCode(999979)),
    ("PREMIUMRATESERVICES", CountryCode(999979)),
    ("ITPCS", CountryCode(999991)),
    ("INTERNATIONALTELECOMMUNICATIONSPUBLICCORRESPONDENCESERVICETRIAL", CountryCode(999991)),
    ("INTERNATIONALTELECOMMUNICATIONSPUBLICCORRESPONDENCESERVICES", CountryCode(999991)),
    ("INTERNATIONALTELECOMMUNICATIONSCORRESPONDENCESERVICE", CountryCode(999991)),
    ("INTERNATIONALTELECOMMUNICATIONSCORRESPONDENCESERVICES", CountryCode(999991)),
];
