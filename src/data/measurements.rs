use crate::models::measurement::Measurement;

const fn station(lat: f64, lon: f64, p_min: f64, p_max: f64, count: u32, temp: f64) -> Measurement {
    Measurement {
        latitude: lat,
        longitude: lon,
        pressure_min: p_min,
        pressure_max: p_max,
        pressure_count: count,
        temperature: temp,
    }
}

/// Caribbean Sea section, north-west drift of a single float.
pub static CARIBBEAN_MEASUREMENTS: &[Measurement] = &[
    station(16.61493683, -67.30243683, 0.4, 2022.3, 1024, 11.46),
    station(16.64294052, -67.29470825, 0.3, 1839.4, 981, 11.656),
    station(16.68493652, -67.28493499, 0.4, 1940.9, 982, 11.41),
    station(16.73183060, -67.28099823, 0.4, 1919.6, 990, 11.531),
    station(16.78118705, -67.27290344, 0.3, 1900.1, 978, 11.552),
    station(16.87450981, -67.25473785, 0.4, 2016.7, 1020, 11.686),
    station(16.97711181, -67.25085449, 0.4, 1996.7, 1004, 11.588),
    station(17.07415199, -67.24897003, 0.3, 2006.2, 1002, 11.624),
    station(17.15763092, -67.26374817, 0.4, 1998.1, 1014, 11.795),
    station(17.22288703, -67.30921936, 0.4, 2011.9, 1018, 11.728),
    station(17.26461792, -67.36209869, 0.3, 1996.9, 1013, 11.825),
    station(17.28343391, -67.43362427, 0.4, 2017.9, 1022, 11.758),
    station(17.30926895, -67.48382568, 0.4, 1996.2, 1017, 11.813),
    station(17.33198928, -67.52412415, 0.4, 2001.1, 1016, 11.279),
    station(17.34464073, -67.55323028, 0.4, 1998.0, 1016, 11.501),
    station(17.36059761, -67.58626556, 0.4, 1992.8, 1011, 11.729),
    station(17.37718582, -67.63383483, 0.4, 2006.7, 1014, 11.735),
    station(17.40514183, -67.66533661, 0.3, 2012.4, 1016, 11.756),
    station(17.42603874, -67.71547699, 0.4, 2005.6, 998, 11.245),
];
