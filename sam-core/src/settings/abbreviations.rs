//! Default Danish abbreviation dictionary
//!
//! Keys are the short forms with every period removed, which is how the
//! expander normalizes a match before looking it up.

use std::collections::HashMap;

/// Short form (periods stripped) to expansion
pub const DEFAULT_ABBREVIATIONS: &[(&str, &str)] = &[
    ("osv", "og så videre"),
    ("adm", "administration"),
    ("adr", "adresse"),
    ("afd", "afdeling"),
    ("alm", "almindelig"),
    ("ang", "angående"),
    ("bh", "brystholder"),
    ("bla", "blandt andet"),
    ("d", "den"),
    ("dvs", "det vil sige"),
    ("eg", "for eksempel"),
    ("eksl", "eksklusiv"),
    ("evt", "eventuelt"),
    ("feks", "for eksempel"),
    ("fhv", "forhenværende"),
    ("frk", "frøken"),
    ("fx", "for eksempel"),
    ("hc", "hans christian"),
    ("hhv", "henholdsvis"),
    ("hr", "herre"),
    ("ie", "det vil sige"),
    ("ifb", "i forbindelse"),
    ("ifl", "ifølge"),
    ("inkl", "inklusiv"),
    ("jf", "jævnfør"),
    ("jr", "junior"),
    ("jvf", "jævnfør"),
    ("kbh", "københavn"),
    ("m", "med"),
    ("mio", "millioner"),
    ("ml", "milliliter"),
    ("mr", "mister"),
    ("mrs", "misses"),
    ("ofl", "og flere"),
    ("opg", "opgang"),
    ("org", "organisation"),
    ("pt", "for tiden"),
    ("pga", "på grund af"),
    ("phd", "philosophiae doctor"),
    ("su", "SU"),
    ("sek", "sekund"),
    ("th", "til højre"),
    ("vejl", "vejledende"),
    ("vedr", "vedrørende"),
    ("vh", "venlig hilsen"),
    ("vha", "ved hjælp af"),
    ("lign", "lignende"),
    ("mfl", "med flere"),
    ("mia", "milliard"),
    ("mm", "med mere"),
    ("mv", "med videre"),
    ("mvh", "med venlig hilsen"),
    ("dsv", "desværre"),
    ("ai", "indtil videre"),
];

/// Build the default dictionary
pub fn default_abbreviations() -> HashMap<String, String> {
    DEFAULT_ABBREVIATIONS
        .iter()
        .map(|(short, long)| ((*short).to_string(), (*long).to_string()))
        .collect()
}

/// Normalize a matched abbreviation into its dictionary key
pub fn lookup_key(matched: &str) -> String {
    matched.trim().replace('.', "")
}
