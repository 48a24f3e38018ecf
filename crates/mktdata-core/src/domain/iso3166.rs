//! ISO 3166-1 country registry.

/// One ISO 3166-1 entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountryRecord {
    pub alpha_2: &'static str,
    pub alpha_3: &'static str,
    pub numeric: &'static str,
    pub name: &'static str,
    pub official_name: Option<&'static str>,
    pub common_name: Option<&'static str>,
}

const fn record(
    alpha_2: &'static str,
    alpha_3: &'static str,
    numeric: &'static str,
    name: &'static str,
    official_name: Option<&'static str>,
    common_name: Option<&'static str>,
) -> CountryRecord {
    CountryRecord {
        alpha_2,
        alpha_3,
        numeric,
        name,
        official_name,
        common_name,
    }
}

/// Sorted by alpha-2 code.
pub const COUNTRIES: [CountryRecord; 249] = [
    record("AD", "AND", "020", "Andorra", Some("Principality of Andorra"), None),
    record("AE", "ARE", "784", "United Arab Emirates", None, None),
    record("AF", "AFG", "004", "Afghanistan", Some("Islamic Republic of Afghanistan"), None),
    record("AG", "ATG", "028", "Antigua and Barbuda", None, None),
    record("AI", "AIA", "660", "Anguilla", None, None),
    record("AL", "ALB", "008", "Albania", Some("Republic of Albania"), None),
    record("AM", "ARM", "051", "Armenia", Some("Republic of Armenia"), None),
    record("AO", "AGO", "024", "Angola", Some("Republic of Angola"), None),
    record("AQ", "ATA", "010", "Antarctica", None, None),
    record("AR", "ARG", "032", "Argentina", Some("Argentine Republic"), None),
    record("AS", "ASM", "016", "American Samoa", None, None),
    record("AT", "AUT", "040", "Austria", Some("Republic of Austria"), None),
    record("AU", "AUS", "036", "Australia", None, None),
    record("AW", "ABW", "533", "Aruba", None, None),
    record("AX", "ALA", "248", "Åland Islands", None, None),
    record("AZ", "AZE", "031", "Azerbaijan", Some("Republic of Azerbaijan"), None),
    record("BA", "BIH", "070", "Bosnia and Herzegovina", Some("Republic of Bosnia and Herzegovina"), None),
    record("BB", "BRB", "052", "Barbados", None, None),
    record("BD", "BGD", "050", "Bangladesh", Some("People's Republic of Bangladesh"), None),
    record("BE", "BEL", "056", "Belgium", Some("Kingdom of Belgium"), None),
    record("BF", "BFA", "854", "Burkina Faso", None, None),
    record("BG", "BGR", "100", "Bulgaria", Some("Republic of Bulgaria"), None),
    record("BH", "BHR", "048", "Bahrain", Some("Kingdom of Bahrain"), None),
    record("BI", "BDI", "108", "Burundi", Some("Republic of Burundi"), None),
    record("BJ", "BEN", "204", "Benin", Some("Republic of Benin"), None),
    record("BL", "BLM", "652", "Saint Barthélemy", None, None),
    record("BM", "BMU", "060", "Bermuda", None, None),
    record("BN", "BRN", "096", "Brunei Darussalam", None, None),
    record("BO", "BOL", "068", "Bolivia, Plurinational State of", Some("Plurinational State of Bolivia"), Some("Bolivia")),
    record("BQ", "BES", "535", "Bonaire, Sint Eustatius and Saba", Some("Bonaire, Sint Eustatius and Saba"), None),
    record("BR", "BRA", "076", "Brazil", Some("Federative Republic of Brazil"), None),
    record("BS", "BHS", "044", "Bahamas", Some("Commonwealth of the Bahamas"), None),
    record("BT", "BTN", "064", "Bhutan", Some("Kingdom of Bhutan"), None),
    record("BV", "BVT", "074", "Bouvet Island", None, None),
    record("BW", "BWA", "072", "Botswana", Some("Republic of Botswana"), None),
    record("BY", "BLR", "112", "Belarus", Some("Republic of Belarus"), None),
    record("BZ", "BLZ", "084", "Belize", None, None),
    record("CA", "CAN", "124", "Canada", None, None),
    record("CC", "CCK", "166", "Cocos (Keeling) Islands", None, None),
    record("CD", "COD", "180", "Congo, The Democratic Republic of the", None, None),
    record("CF", "CAF", "140", "Central African Republic", None, None),
    record("CG", "COG", "178", "Congo", Some("Republic of the Congo"), None),
    record("CH", "CHE", "756", "Switzerland", Some("Swiss Confederation"), None),
    record("CI", "CIV", "384", "Côte d'Ivoire", Some("Republic of Côte d'Ivoire"), None),
    record("CK", "COK", "184", "Cook Islands", None, None),
    record("CL", "CHL", "152", "Chile", Some("Republic of Chile"), None),
    record("CM", "CMR", "120", "Cameroon", Some("Republic of Cameroon"), None),
    record("CN", "CHN", "156", "China", Some("People's Republic of China"), None),
    record("CO", "COL", "170", "Colombia", Some("Republic of Colombia"), None),
    record("CR", "CRI", "188", "Costa Rica", Some("Republic of Costa Rica"), None),
    record("CU", "CUB", "192", "Cuba", Some("Republic of Cuba"), None),
    record("CV", "CPV", "132", "Cabo Verde", Some("Republic of Cabo Verde"), None),
    record("CW", "CUW", "531", "Curaçao", Some("Curaçao"), None),
    record("CX", "CXR", "162", "Christmas Island", None, None),
    record("CY", "CYP", "196", "Cyprus", Some("Republic of Cyprus"), None),
    record("CZ", "CZE", "203", "Czechia", Some("Czech Republic"), None),
    record("DE", "DEU", "276", "Germany", Some("Federal Republic of Germany"), None),
    record("DJ", "DJI", "262", "Djibouti", Some("Republic of Djibouti"), None),
    record("DK", "DNK", "208", "Denmark", Some("Kingdom of Denmark"), None),
    record("DM", "DMA", "212", "Dominica", Some("Commonwealth of Dominica"), None),
    record("DO", "DOM", "214", "Dominican Republic", None, None),
    record("DZ", "DZA", "012", "Algeria", Some("People's Democratic Republic of Algeria"), None),
    record("EC", "ECU", "218", "Ecuador", Some("Republic of Ecuador"), None),
    record("EE", "EST", "233", "Estonia", Some("Republic of Estonia"), None),
    record("EG", "EGY", "818", "Egypt", Some("Arab Republic of Egypt"), None),
    record("EH", "ESH", "732", "Western Sahara", None, None),
    record("ER", "ERI", "232", "Eritrea", Some("the State of Eritrea"), None),
    record("ES", "ESP", "724", "Spain", Some("Kingdom of Spain"), None),
    record("ET", "ETH", "231", "Ethiopia", Some("Federal Democratic Republic of Ethiopia"), None),
    record("FI", "FIN", "246", "Finland", Some("Republic of Finland"), None),
    record("FJ", "FJI", "242", "Fiji", Some("Republic of Fiji"), None),
    record("FK", "FLK", "238", "Falkland Islands (Malvinas)", None, None),
    record("FM", "FSM", "583", "Micronesia, Federated States of", Some("Federated States of Micronesia"), None),
    record("FO", "FRO", "234", "Faroe Islands", None, None),
    record("FR", "FRA", "250", "France", Some("French Republic"), None),
    record("GA", "GAB", "266", "Gabon", Some("Gabonese Republic"), None),
    record("GB", "GBR", "826", "United Kingdom", Some("United Kingdom of Great Britain and Northern Ireland"), None),
    record("GD", "GRD", "308", "Grenada", None, None),
    record("GE", "GEO", "268", "Georgia", None, None),
    record("GF", "GUF", "254", "French Guiana", None, None),
    record("GG", "GGY", "831", "Guernsey", None, None),
    record("GH", "GHA", "288", "Ghana", Some("Republic of Ghana"), None),
    record("GI", "GIB", "292", "Gibraltar", None, None),
    record("GL", "GRL", "304", "Greenland", None, None),
    record("GM", "GMB", "270", "Gambia", Some("Republic of the Gambia"), None),
    record("GN", "GIN", "324", "Guinea", Some("Republic of Guinea"), None),
    record("GP", "GLP", "312", "Guadeloupe", None, None),
    record("GQ", "GNQ", "226", "Equatorial Guinea", Some("Republic of Equatorial Guinea"), None),
    record("GR", "GRC", "300", "Greece", Some("Hellenic Republic"), None),
    record("GS", "SGS", "239", "South Georgia and the South Sandwich Islands", None, None),
    record("GT", "GTM", "320", "Guatemala", Some("Republic of Guatemala"), None),
    record("GU", "GUM", "316", "Guam", None, None),
    record("GW", "GNB", "624", "Guinea-Bissau", Some("Republic of Guinea-Bissau"), None),
    record("GY", "GUY", "328", "Guyana", Some("Republic of Guyana"), None),
    record("HK", "HKG", "344", "Hong Kong", Some("Hong Kong Special Administrative Region of China"), None),
    record("HM", "HMD", "334", "Heard Island and McDonald Islands", None, None),
    record("HN", "HND", "340", "Honduras", Some("Republic of Honduras"), None),
    record("HR", "HRV", "191", "Croatia", Some("Republic of Croatia"), None),
    record("HT", "HTI", "332", "Haiti", Some("Republic of Haiti"), None),
    record("HU", "HUN", "348", "Hungary", Some("Hungary"), None),
    record("ID", "IDN", "360", "Indonesia", Some("Republic of Indonesia"), None),
    record("IE", "IRL", "372", "Ireland", None, None),
    record("IL", "ISR", "376", "Israel", Some("State of Israel"), None),
    record("IM", "IMN", "833", "Isle of Man", None, None),
    record("IN", "IND", "356", "India", Some("Republic of India"), None),
    record("IO", "IOT", "086", "British Indian Ocean Territory", None, None),
    record("IQ", "IRQ", "368", "Iraq", Some("Republic of Iraq"), None),
    record("IR", "IRN", "364", "Iran, Islamic Republic of", Some("Islamic Republic of Iran"), Some("Iran")),
    record("IS", "ISL", "352", "Iceland", Some("Republic of Iceland"), None),
    record("IT", "ITA", "380", "Italy", Some("Italian Republic"), None),
    record("JE", "JEY", "832", "Jersey", None, None),
    record("JM", "JAM", "388", "Jamaica", None, None),
    record("JO", "JOR", "400", "Jordan", Some("Hashemite Kingdom of Jordan"), None),
    record("JP", "JPN", "392", "Japan", None, None),
    record("KE", "KEN", "404", "Kenya", Some("Republic of Kenya"), None),
    record("KG", "KGZ", "417", "Kyrgyzstan", Some("Kyrgyz Republic"), None),
    record("KH", "KHM", "116", "Cambodia", Some("Kingdom of Cambodia"), None),
    record("KI", "KIR", "296", "Kiribati", Some("Republic of Kiribati"), None),
    record("KM", "COM", "174", "Comoros", Some("Union of the Comoros"), None),
    record("KN", "KNA", "659", "Saint Kitts and Nevis", None, None),
    record("KP", "PRK", "408", "Korea, Democratic People's Republic of", Some("Democratic People's Republic of Korea"), Some("North Korea")),
    record("KR", "KOR", "410", "Korea, Republic of", None, Some("South Korea")),
    record("KW", "KWT", "414", "Kuwait", Some("State of Kuwait"), None),
    record("KY", "CYM", "136", "Cayman Islands", None, None),
    record("KZ", "KAZ", "398", "Kazakhstan", Some("Republic of Kazakhstan"), None),
    record("LA", "LAO", "418", "Lao People's Democratic Republic", None, Some("Laos")),
    record("LB", "LBN", "422", "Lebanon", Some("Lebanese Republic"), None),
    record("LC", "LCA", "662", "Saint Lucia", None, None),
    record("LI", "LIE", "438", "Liechtenstein", Some("Principality of Liechtenstein"), None),
    record("LK", "LKA", "144", "Sri Lanka", Some("Democratic Socialist Republic of Sri Lanka"), None),
    record("LR", "LBR", "430", "Liberia", Some("Republic of Liberia"), None),
    record("LS", "LSO", "426", "Lesotho", Some("Kingdom of Lesotho"), None),
    record("LT", "LTU", "440", "Lithuania", Some("Republic of Lithuania"), None),
    record("LU", "LUX", "442", "Luxembourg", Some("Grand Duchy of Luxembourg"), None),
    record("LV", "LVA", "428", "Latvia", Some("Republic of Latvia"), None),
    record("LY", "LBY", "434", "Libya", Some("Libya"), None),
    record("MA", "MAR", "504", "Morocco", Some("Kingdom of Morocco"), None),
    record("MC", "MCO", "492", "Monaco", Some("Principality of Monaco"), None),
    record("MD", "MDA", "498", "Moldova, Republic of", Some("Republic of Moldova"), Some("Moldova")),
    record("ME", "MNE", "499", "Montenegro", Some("Montenegro"), None),
    record("MF", "MAF", "663", "Saint Martin (French part)", None, None),
    record("MG", "MDG", "450", "Madagascar", Some("Republic of Madagascar"), None),
    record("MH", "MHL", "584", "Marshall Islands", Some("Republic of the Marshall Islands"), None),
    record("MK", "MKD", "807", "North Macedonia", Some("Republic of North Macedonia"), None),
    record("ML", "MLI", "466", "Mali", Some("Republic of Mali"), None),
    record("MM", "MMR", "104", "Myanmar", Some("Republic of Myanmar"), None),
    record("MN", "MNG", "496", "Mongolia", None, None),
    record("MO", "MAC", "446", "Macao", Some("Macao Special Administrative Region of China"), None),
    record("MP", "MNP", "580", "Northern Mariana Islands", Some("Commonwealth of the Northern Mariana Islands"), None),
    record("MQ", "MTQ", "474", "Martinique", None, None),
    record("MR", "MRT", "478", "Mauritania", Some("Islamic Republic of Mauritania"), None),
    record("MS", "MSR", "500", "Montserrat", None, None),
    record("MT", "MLT", "470", "Malta", Some("Republic of Malta"), None),
    record("MU", "MUS", "480", "Mauritius", Some("Republic of Mauritius"), None),
    record("MV", "MDV", "462", "Maldives", Some("Republic of Maldives"), None),
    record("MW", "MWI", "454", "Malawi", Some("Republic of Malawi"), None),
    record("MX", "MEX", "484", "Mexico", Some("United Mexican States"), None),
    record("MY", "MYS", "458", "Malaysia", None, None),
    record("MZ", "MOZ", "508", "Mozambique", Some("Republic of Mozambique"), None),
    record("NA", "NAM", "516", "Namibia", Some("Republic of Namibia"), None),
    record("NC", "NCL", "540", "New Caledonia", None, None),
    record("NE", "NER", "562", "Niger", Some("Republic of the Niger"), None),
    record("NF", "NFK", "574", "Norfolk Island", None, None),
    record("NG", "NGA", "566", "Nigeria", Some("Federal Republic of Nigeria"), None),
    record("NI", "NIC", "558", "Nicaragua", Some("Republic of Nicaragua"), None),
    record("NL", "NLD", "528", "Netherlands", Some("Kingdom of the Netherlands"), None),
    record("NO", "NOR", "578", "Norway", Some("Kingdom of Norway"), None),
    record("NP", "NPL", "524", "Nepal", Some("Federal Democratic Republic of Nepal"), None),
    record("NR", "NRU", "520", "Nauru", Some("Republic of Nauru"), None),
    record("NU", "NIU", "570", "Niue", Some("Niue"), None),
    record("NZ", "NZL", "554", "New Zealand", None, None),
    record("OM", "OMN", "512", "Oman", Some("Sultanate of Oman"), None),
    record("PA", "PAN", "591", "Panama", Some("Republic of Panama"), None),
    record("PE", "PER", "604", "Peru", Some("Republic of Peru"), None),
    record("PF", "PYF", "258", "French Polynesia", None, None),
    record("PG", "PNG", "598", "Papua New Guinea", Some("Independent State of Papua New Guinea"), None),
    record("PH", "PHL", "608", "Philippines", Some("Republic of the Philippines"), None),
    record("PK", "PAK", "586", "Pakistan", Some("Islamic Republic of Pakistan"), None),
    record("PL", "POL", "616", "Poland", Some("Republic of Poland"), None),
    record("PM", "SPM", "666", "Saint Pierre and Miquelon", None, None),
    record("PN", "PCN", "612", "Pitcairn", None, None),
    record("PR", "PRI", "630", "Puerto Rico", None, None),
    record("PS", "PSE", "275", "Palestine, State of", Some("the State of Palestine"), None),
    record("PT", "PRT", "620", "Portugal", Some("Portuguese Republic"), None),
    record("PW", "PLW", "585", "Palau", Some("Republic of Palau"), None),
    record("PY", "PRY", "600", "Paraguay", Some("Republic of Paraguay"), None),
    record("QA", "QAT", "634", "Qatar", Some("State of Qatar"), None),
    record("RE", "REU", "638", "Réunion", None, None),
    record("RO", "ROU", "642", "Romania", None, None),
    record("RS", "SRB", "688", "Serbia", Some("Republic of Serbia"), None),
    record("RU", "RUS", "643", "Russian Federation", None, None),
    record("RW", "RWA", "646", "Rwanda", Some("Rwandese Republic"), None),
    record("SA", "SAU", "682", "Saudi Arabia", Some("Kingdom of Saudi Arabia"), None),
    record("SB", "SLB", "090", "Solomon Islands", None, None),
    record("SC", "SYC", "690", "Seychelles", Some("Republic of Seychelles"), None),
    record("SD", "SDN", "729", "Sudan", Some("Republic of the Sudan"), None),
    record("SE", "SWE", "752", "Sweden", Some("Kingdom of Sweden"), None),
    record("SG", "SGP", "702", "Singapore", Some("Republic of Singapore"), None),
    record("SH", "SHN", "654", "Saint Helena, Ascension and Tristan da Cunha", None, None),
    record("SI", "SVN", "705", "Slovenia", Some("Republic of Slovenia"), None),
    record("SJ", "SJM", "744", "Svalbard and Jan Mayen", None, None),
    record("SK", "SVK", "703", "Slovakia", Some("Slovak Republic"), None),
    record("SL", "SLE", "694", "Sierra Leone", Some("Republic of Sierra Leone"), None),
    record("SM", "SMR", "674", "San Marino", Some("Republic of San Marino"), None),
    record("SN", "SEN", "686", "Senegal", Some("Republic of Senegal"), None),
    record("SO", "SOM", "706", "Somalia", Some("Federal Republic of Somalia"), None),
    record("SR", "SUR", "740", "Suriname", Some("Republic of Suriname"), None),
    record("SS", "SSD", "728", "South Sudan", Some("Republic of South Sudan"), None),
    record("ST", "STP", "678", "Sao Tome and Principe", Some("Democratic Republic of Sao Tome and Principe"), None),
    record("SV", "SLV", "222", "El Salvador", Some("Republic of El Salvador"), None),
    record("SX", "SXM", "534", "Sint Maarten (Dutch part)", Some("Sint Maarten (Dutch part)"), None),
    record("SY", "SYR", "760", "Syrian Arab Republic", None, Some("Syria")),
    record("SZ", "SWZ", "748", "Eswatini", Some("Kingdom of Eswatini"), None),
    record("TC", "TCA", "796", "Turks and Caicos Islands", None, None),
    record("TD", "TCD", "148", "Chad", Some("Republic of Chad"), None),
    record("TF", "ATF", "260", "French Southern Territories", None, None),
    record("TG", "TGO", "768", "Togo", Some("Togolese Republic"), None),
    record("TH", "THA", "764", "Thailand", Some("Kingdom of Thailand"), None),
    record("TJ", "TJK", "762", "Tajikistan", Some("Republic of Tajikistan"), None),
    record("TK", "TKL", "772", "Tokelau", None, None),
    record("TL", "TLS", "626", "Timor-Leste", Some("Democratic Republic of Timor-Leste"), None),
    record("TM", "TKM", "795", "Turkmenistan", None, None),
    record("TN", "TUN", "788", "Tunisia", Some("Republic of Tunisia"), None),
    record("TO", "TON", "776", "Tonga", Some("Kingdom of Tonga"), None),
    record("TR", "TUR", "792", "Türkiye", Some("Republic of Türkiye"), None),
    record("TT", "TTO", "780", "Trinidad and Tobago", Some("Republic of Trinidad and Tobago"), None),
    record("TV", "TUV", "798", "Tuvalu", None, None),
    record("TW", "TWN", "158", "Taiwan, Province of China", Some("Taiwan, Province of China"), Some("Taiwan")),
    record("TZ", "TZA", "834", "Tanzania, United Republic of", Some("United Republic of Tanzania"), Some("Tanzania")),
    record("UA", "UKR", "804", "Ukraine", None, None),
    record("UG", "UGA", "800", "Uganda", Some("Republic of Uganda"), None),
    record("UM", "UMI", "581", "United States Minor Outlying Islands", None, None),
    record("US", "USA", "840", "United States", Some("United States of America"), None),
    record("UY", "URY", "858", "Uruguay", Some("Eastern Republic of Uruguay"), None),
    record("UZ", "UZB", "860", "Uzbekistan", Some("Republic of Uzbekistan"), None),
    record("VA", "VAT", "336", "Holy See (Vatican City State)", None, None),
    record("VC", "VCT", "670", "Saint Vincent and the Grenadines", None, None),
    record("VE", "VEN", "862", "Venezuela, Bolivarian Republic of", Some("Bolivarian Republic of Venezuela"), Some("Venezuela")),
    record("VG", "VGB", "092", "Virgin Islands, British", Some("British Virgin Islands"), None),
    record("VI", "VIR", "850", "Virgin Islands, U.S.", Some("Virgin Islands of the United States"), None),
    record("VN", "VNM", "704", "Viet Nam", Some("Socialist Republic of Viet Nam"), Some("Vietnam")),
    record("VU", "VUT", "548", "Vanuatu", Some("Republic of Vanuatu"), None),
    record("WF", "WLF", "876", "Wallis and Futuna", None, None),
    record("WS", "WSM", "882", "Samoa", Some("Independent State of Samoa"), None),
    record("YE", "YEM", "887", "Yemen", Some("Republic of Yemen"), None),
    record("YT", "MYT", "175", "Mayotte", None, None),
    record("ZA", "ZAF", "710", "South Africa", Some("Republic of South Africa"), None),
    record("ZM", "ZMB", "894", "Zambia", Some("Republic of Zambia"), None),
    record("ZW", "ZWE", "716", "Zimbabwe", Some("Republic of Zimbabwe"), None),
];
