//! Static unit tables: prefixes, dimension categories and their units
//!
//! Scalars are decimal strings so they load exactly into `Number`.
//! Each unit scalar is relative to its category's base composition.
//! Categories are listed in registration order; when two units share an
//! alias the later category wins (`C` is celsius, `F` fahrenheit, `R` rankine).

/// Canonical token, e.g. `<meter>` or `<kilo>`
pub type Token = &'static str;

/// The dimensionless token
pub const UNITY: Token = "<1>";

/// Tokens that are already SI (or SI-adjacent) base units
pub const BASE_UNITS: [Token; 15] = [
    "<meter>", "<kilogram>", "<second>", "<mole>", "<farad>", "<ampere>", "<radian>",
    "<kelvin>", "<temp-K>", "<byte>", "<dollar>", "<candela>", "<each>", "<steradian>", "<bel>",
];

/// A prefix and the aliases that spell it
pub struct PrefixDef {
    pub token: Token,
    pub aliases: &'static [&'static str],
    pub factor: &'static str,
}

/// A unit: aliases (the first is the output spelling) and its scalar
pub struct UnitDef {
    pub token: Token,
    pub aliases: &'static [&'static str],
    pub scalar: &'static str,
}

/// A dimension family with its base composition
pub struct CategoryDef {
    pub name: &'static str,
    pub numerator: &'static [Token],
    pub denominator: &'static [Token],
    pub units: &'static [UnitDef],
}

const fn p(token: Token, aliases: &'static [&'static str], factor: &'static str) -> PrefixDef {
    PrefixDef { token, aliases, factor }
}

const fn u(token: Token, aliases: &'static [&'static str], scalar: &'static str) -> UnitDef {
    UnitDef { token, aliases, scalar }
}

const PI_OVER_180: &str = "3.14159265358979323846264338327950288/180";
const PI_OVER_200: &str = "3.14159265358979323846264338327950288/200";
const TWO_PI: &str = "6.28318530717958647692528676655900576";
const TWO_PI_OVER_60: &str = "6.28318530717958647692528676655900576/60";

pub static PREFIXES: &[PrefixDef] = &[
    p("<googol>", &["googol"], "1e100"),
    p("<kibi>", &["Ki", "Kibi", "kibi"], "1024"),
    p("<mebi>", &["Mi", "Mebi", "mebi"], "1048576"),
    p("<gibi>", &["Gi", "Gibi", "gibi"], "1073741824"),
    p("<tebi>", &["Ti", "Tebi", "tebi"], "1099511627776"),
    p("<pebi>", &["Pi", "Pebi", "pebi"], "1125899906842624"),
    p("<exi>", &["Ei", "Exi", "exi"], "1152921504606846976"),
    p("<zebi>", &["Zi", "Zebi", "zebi"], "1180591620717411303424"),
    p("<yebi>", &["Yi", "Yebi", "yebi"], "1208925819614629174706176"),
    p("<yotta>", &["Y", "Yotta", "yotta"], "1e24"),
    p("<zetta>", &["Z", "Zetta", "zetta"], "1e21"),
    p("<exa>", &["E", "Exa", "exa"], "1e18"),
    p("<peta>", &["P", "Peta", "peta"], "1e15"),
    p("<tera>", &["T", "Tera", "tera"], "1e12"),
    p("<giga>", &["G", "Giga", "giga"], "1e9"),
    p("<mega>", &["M", "Mega", "mega"], "1e6"),
    p("<kilo>", &["k", "kilo"], "1e3"),
    p("<hecto>", &["h", "Hecto", "hecto"], "1e2"),
    p("<deca>", &["da", "Deca", "deca", "deka"], "1e1"),
    p("<deci>", &["d", "Deci", "deci"], "1e-1"),
    p("<centi>", &["c", "Centi", "centi"], "1e-2"),
    p("<milli>", &["m", "Milli", "milli"], "1e-3"),
    p("<micro>", &["u", "\u{03BC}", "\u{00B5}", "Micro", "mc", "micro"], "1e-6"),
    p("<nano>", &["n", "Nano", "nano"], "1e-9"),
    p("<pico>", &["p", "Pico", "pico"], "1e-12"),
    p("<femto>", &["f", "Femto", "femto"], "1e-15"),
    p("<atto>", &["a", "Atto", "atto"], "1e-18"),
    p("<zepto>", &["z", "Zepto", "zepto"], "1e-21"),
    p("<yocto>", &["y", "Yocto", "yocto"], "1e-24"),
];

const M: Token = "<meter>";
const KG: Token = "<kilogram>";
const S: Token = "<second>";
const A: Token = "<ampere>";

pub static CATEGORIES: &[CategoryDef] = &[
    CategoryDef {
        name: "",
        numerator: &[],
        denominator: &[],
        units: &[u(UNITY, &["1", "<1>"], "1")],
    },
    CategoryDef {
        name: "acceleration",
        numerator: &[M],
        denominator: &[S, S],
        units: &[u("<gee>", &["gee", "gforce", "gn"], "9.80665")],
    },
    CategoryDef {
        name: "angle",
        numerator: &["<radian>"],
        denominator: &[],
        units: &[
            u("<radian>", &["rad", "radian", "radians"], "1"),
            u("<degree>", &["deg", "degree", "degrees"], PI_OVER_180),
            u("<gradian>", &["gon", "grad", "gradian", "grads"], PI_OVER_200),
            u("<aminutes>", &["amin", "amins", "arcmin", "arcmins"], "0.0002908882"),
            u("<aseconds>", &["asec", "asecs", "arcsec", "arcsecs"], "4.8481366667e-6"),
            u("<amils>", &["amil", "amils"], "9.817477e-4"),
            u("<octant>", &["octant"], "0.785398163"),
            u("<quadrant>", &["quadrant", "quadrants"], "1.570796327"),
            u("<sextant>", &["sextant"], "1.047197551"),
            u("<rev>", &["rev"], "6.283185307"),
            u("<compass-pt>", &["cpoint"], "0.196349540849362"),
        ],
    },
    CategoryDef {
        name: "area",
        numerator: &[M, M],
        denominator: &[],
        units: &[
            u("<acre>", &["acre", "acres"], "4046.856422"),
            u("<acre-us>", &["acre(us)", "acres(us)"], "4046.873"),
            u("<ares>", &["are", "ares"], "100"),
            u("<barn>", &["barn", "barns"], "1e-28"),
            u("<dunam>", &["dunam"], "1000"),
            u("<hectare>", &["ha", "hectare"], "10000"),
            u("<rood>", &["rood", "roods"], "1011.714106"),
        ],
    },
    CategoryDef {
        name: "capacitance",
        numerator: &[A, S],
        denominator: &[],
        units: &[u("<farad>", &["F", "farad", "Farad"], "1")],
    },
    CategoryDef {
        name: "charge",
        numerator: &[A, S],
        denominator: &[],
        units: &[
            u("<coulomb>", &["C", "coulomb", "Coulomb"], "1"),
            u("<esu>", &["ESU", "esu", "Fr", "statC", "StatC"], "3.335640952e-10"),
        ],
    },
    CategoryDef {
        name: "currency",
        numerator: &["<dollar>"],
        denominator: &[],
        units: &[
            u("<dollar>", &["dollar", "dollars"], "1"),
            u("<cents>", &["cents"], "0.01"),
        ],
    },
    CategoryDef {
        name: "current",
        numerator: &[A],
        denominator: &[],
        units: &[
            u("<ampere>", &["A", "Ampere", "ampere", "amp", "amps"], "1"),
            u("<biot>", &["Biot"], "10"),
            u("<statampere>", &["StatAmpere", "statA", "StatA"], "3.335641e-10"),
        ],
    },
    CategoryDef {
        name: "data",
        numerator: &["<byte>"],
        denominator: &[],
        units: &[
            u("<byte>", &["B", "byte"], "1"),
            u("<bit>", &["b", "bit"], "0.125"),
            u("<nibble>", &["nibble"], "0.5"),
        ],
    },
    CategoryDef {
        name: "electricalConductance",
        numerator: &[S, S, S, A, A],
        denominator: &[KG, M, M],
        units: &[
            u("<siemens>", &["S", "Siemen", "Siemens", "siemens", "mho", "mhos"], "1"),
            u("<statmho>", &["statmho"], "1.112347052e-12"),
        ],
    },
    CategoryDef {
        name: "electricalInductance",
        numerator: &[M, M, KG],
        denominator: &[S, S, A, A],
        units: &[
            u("<henry>", &["H", "Henry", "henry"], "1"),
            u("<abhenry>", &["abH"], "1e-9"),
            u("<statH>", &["statH", "StatH"], "8.987552e11"),
        ],
    },
    CategoryDef {
        name: "electricalPotential",
        numerator: &[M, M, KG],
        denominator: &[S, S, S, A],
        units: &[
            u("<volt>", &["V", "Volt", "volt", "volts"], "1"),
            u("<abvolt>", &["abV", "abVolt"], "1e-8"),
            u("<statvolts>", &["statV"], "299.7925"),
        ],
    },
    CategoryDef {
        name: "electricalResistance",
        numerator: &[M, M, KG],
        denominator: &[S, S, S, A, A],
        units: &[
            u("<ohm>", &["Ohm", "ohm", "\u{03A9}", "\u{2126}"], "1"),
            u("<abohm>", &["abOhm"], "1e-9"),
        ],
    },
    CategoryDef {
        name: "energy",
        numerator: &[M, M, KG],
        denominator: &[S, S],
        units: &[
            u("<btu>", &["BTU", "btu", "BTUs", "Btu"], "1055.055853"),
            u("<btu-thermo>", &["BTU(th)", "btu(th)", "btus(th)", "Btu(th)"], "1054.35026444"),
            u("<calorie>", &["cal", "calorie", "calories"], "4.1868"),
            u("<calorie-IUNS>", &["cal(N)"], "4.182"),
            u("<calorie-thermo>", &["cal(th)"], "4.184"),
            u("<erg>", &["erg", "ergs"], "1e-7"),
            u("<electron-volts>", &["eV"], "1.60217653e-19"),
            u("<joule>", &["J", "joule", "Joule", "joules"], "1"),
            u("<therm-euro>", &["thm", "therm", "therms", "Therm"], "105505590"),
            u("<therm-US>", &["thm(us)", "therm(us)", "therms(us)", "Therm(us)"], "105480400"),
            u("<TNT>", &["tTNT"], "4184000000"),
        ],
    },
    CategoryDef {
        name: "force",
        numerator: &[KG, M],
        denominator: &[S, S],
        units: &[
            u("<newton>", &["N", "Newton", "newton"], "1"),
            u("<dyne>", &["dyn", "dyne"], "1e-5"),
            u("<gram-force>", &["gf", "gram-force", "pond"], "0.00980665"),
            u("<kg-force>", &["kgf", "kg-force", "kpond"], "9.80665"),
            u("<pound-force>", &["lbf", "pound-force"], "4.448221615"),
            u("<ounce-force>", &["ozf", "ounce-force"], "0.278013851"),
            u("<poundal>", &["pdl", "poundal"], "0.138254954"),
            u("<tonne-force>", &["tf", "tonnef"], "9806.65"),
            u("<ton-force-long>", &["tonlf"], "9964.016418"),
            u("<ton-force-short>", &["tonsf"], "8896.4432"),
        ],
    },
    CategoryDef {
        name: "frequency",
        numerator: &["<radian>"],
        denominator: &[S],
        units: &[
            u("<hertz>", &["Hz", "hertz", "Hertz", "pers"], TWO_PI),
            u("<rpm>", &["rpm", "RPM"], TWO_PI_OVER_60),
        ],
    },
    CategoryDef {
        name: "length",
        numerator: &[M],
        denominator: &[],
        units: &[
            u("<meter>", &["m", "meter", "meters", "metre", "metres"], "1"),
            u("<angstrom>", &["\u{00C5}", "ang", "angstrom", "angstroms"], "1e-10"),
            u("<AU>", &["AU", "au", "astronomical-unit"], "149597870700"),
            u("<caliber>", &["caliber"], "0.0254"),
            u("<chain>", &["chain", "chains"], "20.1168"),
            u("<chain-us>", &["chain(us)"], "20.116840234"),
            u("<cubit>", &["cubit"], "0.4572"),
            u("<cubit-long>", &["cubit(l)"], "0.5334"),
            u("<fathom>", &["fathom", "fathoms"], "1.8288"),
            u("<fermi>", &["Fermi"], "1e-15"),
            u("<finger>", &["finger", "fingers"], "0.1143"),
            u("<foot>", &["ft", "foot", "feet", "'"], "0.3048"),
            u("<furlong>", &["furlong", "furlongs"], "201.168"),
            u("<furlong-us>", &["furlong(us)", "furlong(uss)"], "201.16840234"),
            u("<gmile>", &["gmile"], "1855.3257"),
            u("<hand>", &["hand", "hands"], "0.1016"),
            u("<league>", &["league", "league(us)"], "4828.0417"),
            u("<inch>", &["in", "inch", "inches", "\""], "0.0254"),
            u("<link>", &["link", "links"], "0.201168"),
            u("<link-us>", &["link(us)"], "0.20116840234"),
            u("<light-minute>", &["lmin", "light-minute"], "17987547480"),
            u("<light-second>", &["ls", "light-second"], "299792458"),
            u("<light-year>", &["ly", "light-year"], "9460730472580800"),
            u("<micron>", &["micron"], "1e-6"),
            u("<mil>", &["mil", "mils"], "0.0000254"),
            u("<mile>", &["mi", "mile", "miles"], "1609.344"),
            u("<nail>", &["nail", "nails"], "0.05715"),
            u("<naut-league>", &["nleague"], "5556"),
            u("<naut-league-uk>", &["nleague(uk)"], "5559.552"),
            u("<naut-mile>", &["nmi"], "1852"),
            u("<parsec>", &["pc", "parsec", "parsecs"], "30856780000000000"),
            u("<pica>", &["pica", "picas"], "0.00423333333"),
            u("<planck-length>", &["Planck"], "1.616252e-35"),
            u("<point>", &["point", "points"], "0.000352777777777778"),
            u("<rod>", &["rd", "rod", "rods"], "5.0292"),
            u("<rod-us>", &["rod(us)"], "5.029210058"),
            u("<rope>", &["rope", "ropes"], "6.096"),
            u("<thou>", &["th"], "0.0000254"),
            u("<span>", &["span"], "0.2286"),
            u("<yard>", &["yd", "yard", "yards"], "0.9144"),
        ],
    },
    CategoryDef {
        name: "magneticFlux",
        numerator: &[M, M, KG],
        denominator: &[S, S, A],
        units: &[
            u("<weber>", &["Wb", "weber", "webers"], "1"),
            u("<maxwell>", &["Mx", "maxwell", "maxwells"], "1e-8"),
            u("<line>", &["line"], "1e-8"),
        ],
    },
    CategoryDef {
        name: "magneticFluxDensity",
        numerator: &[KG],
        denominator: &[S, S, A],
        units: &[
            u("<tesla>", &["T", "tesla", "teslas"], "1"),
            u("<gauss>", &["G", "gauss"], "1e-4"),
        ],
    },
    CategoryDef {
        name: "mass",
        numerator: &[KG],
        denominator: &[],
        units: &[
            u("<kilogram>", &["kg", "kilogram", "kilograms"], "1"),
            u("<AMU>", &["u", "AMU", "amu"], "1.660538921e-27"),
            u("<carat>", &["ct", "carat", "carats"], "0.0002"),
            u("<dalton>", &["Da", "Dalton", "Daltons", "dalton", "daltons"], "1.660538921e-27"),
            u("<dram>", &["dram", "drams", "dr"], "0.0017718452"),
            u("<gram>", &["g", "gram", "grams", "gramme", "grammes"], "1e-3"),
            u("<grain>", &["grain", "grains", "gr"], "6.479891e-5"),
            u("<hundredweight-short>", &["cwt(s)"], "45.359237"),
            u("<hundredweight-long>", &["cwt(l)"], "50.80234544"),
            u("<ounce>", &["oz", "ounce", "ounces"], "0.0283495231"),
            u("<ounce-troy>", &["ozt"], "0.031103477"),
            u("<pennyweight>", &["dwt"], "0.00155517384"),
            u("<pound>", &["lbs", "lb", "pound", "pounds", "#"], "0.45359237"),
            u("<pound-troy>", &["lbt"], "0.3732417"),
            u("<quarter-short>", &["qr(s)"], "11.33980925"),
            u("<quarter-long>", &["qr(l)"], "12.70058636"),
            u("<slug>", &["slug", "slugs"], "14.5939029"),
            u("<stone>", &["stone", "stones", "st"], "6.35029318"),
            u("<ton-metric>", &["t", "tonne"], "1000"),
            u("<ton-long>", &["tnl", "ton(l)", "tonl"], "1016.0469088"),
            u("<ton-short>", &["tn", "ton", "ton(s)", "tons"], "907.18474"),
        ],
    },
    CategoryDef {
        name: "power",
        numerator: &[KG, M, M],
        denominator: &[S, S, S],
        units: &[
            u("<watt>", &["W", "watt", "watts"], "1"),
            u("<horsepower>", &["Hp", "hp", "horsepower"], "745.699872"),
            u("<horsepower-electric>", &["Hp(e)", "hp(e)", "hp(electric)"], "746"),
            u("<horsepower-metric>", &["Hp(m)", "hp(m)"], "735.49875"),
        ],
    },
    CategoryDef {
        name: "pressure",
        numerator: &[KG],
        denominator: &[M, S, S],
        units: &[
            u("<pascal>", &["Pa", "pascal", "Pascal"], "1"),
            u("<at>", &["at"], "98066.5"),
            u("<atm>", &["atm", "atmosphere", "atmospheres"], "101325"),
            u("<bar>", &["bar", "bars"], "100000"),
            u("<barye>", &["barye"], "0.1"),
            u("<cmh2o>", &["cmH2O"], "98.0638"),
            u("<cmHg>", &["cmHg"], "1333.223874"),
            u("<inh2o>", &["inH2O"], "249.082052"),
            u("<inHg>", &["inHg"], "3386.3881472"),
            u("<mmh2o>", &["mmH2O"], "9.80665"),
            u("<mmHg>", &["mmHg"], "133.322387415"),
            u("<pieze>", &["pieze"], "1000"),
            u("<psf>", &["psf"], "47.880259"),
            u("<psi>", &["psi"], "6894.757293"),
            u("<torr>", &["torr"], "133.322368"),
        ],
    },
    CategoryDef {
        name: "radiation",
        numerator: &[M, M],
        denominator: &[S, S],
        units: &[
            u("<gray>", &["Gy", "gray", "grays"], "1"),
            u("<roentgen>", &["R", "roentgen"], "0.009330"),
            u("<sievert>", &["Sv", "sievert", "sieverts"], "1"),
        ],
    },
    CategoryDef {
        name: "radioactivity",
        numerator: &[UNITY],
        denominator: &[S],
        units: &[
            u("<becquerel>", &["Bq", "bequerel", "bequerels"], "1"),
            u("<curie>", &["Ci", "curie", "curies"], "3.7e10"),
        ],
    },
    CategoryDef {
        name: "sound",
        numerator: &["<bel>"],
        denominator: &[],
        units: &[
            u("<bel>", &["Bels", "Bel"], "1"),
            u("<neper>", &["Neper"], "0.8686"),
        ],
    },
    CategoryDef {
        name: "substance",
        numerator: &["<mole>"],
        denominator: &[],
        units: &[u("<mole>", &["mol", "mole"], "1")],
    },
    CategoryDef {
        name: "temperature",
        numerator: &["<kelvin>"],
        denominator: &[],
        units: &[
            u("<kelvin>", &["degK", "kelvin", "K"], "1"),
            u("<celsius>", &["degC", "celsius", "centigrade", "C"], "1"),
            u("<fahrenheit>", &["degF", "fahrenheit", "F"], "5/9"),
            u("<rankine>", &["degR", "rankine", "R"], "5/9"),
            u("<temp-K>", &["tempK"], "1"),
            u("<temp-C>", &["tempC"], "1"),
            u("<temp-F>", &["tempF"], "5/9"),
            u("<temp-R>", &["tempR"], "5/9"),
        ],
    },
    CategoryDef {
        name: "time",
        numerator: &[S],
        denominator: &[],
        units: &[
            u("<second>", &["s", "sec", "secs", "second", "seconds"], "1"),
            u("<minute>", &["min", "mins", "minute", "minutes"], "60"),
            u("<hour>", &["h", "hr", "hrs", "hour", "hours"], "3600"),
            u("<day>", &["d", "day", "days"], "86400"),
            u("<week>", &["wk", "week", "weeks"], "604800"),
            u("<fortnight>", &["fortnight", "fortnights"], "1209600"),
            u("<month>", &["month", "months"], "2629740"),
            u("<year>", &["y", "yr", "year", "years", "annum"], "31536000"),
            u("<year-julian>", &["y(j)", "yr(j)", "year(j)", "years(j)"], "31557600"),
            u("<year-leap>", &["y(l)", "yr(l)", "year(l)", "years(l)"], "31622400"),
            u("<year-tropical>", &["tyr", "tyrs"], "31556925.19"),
            u("<decade>", &["decade", "decades"], "315360000"),
            u("<century>", &["century", "centuries"], "3153600000"),
            u("<millienia>", &["millienia", "millenium"], "31536000000"),
            u("<shake>", &["shake"], "1e-8"),
        ],
    },
    CategoryDef {
        name: "velocity",
        numerator: &[M],
        denominator: &[S],
        units: &[
            u("<kph>", &["kph"], "0.277777778"),
            u("<mph>", &["mph"], "0.44704"),
            u("<knot>", &["kn", "knot", "knots"], "0.514444444"),
            u("<mach>", &["mach"], "295.0464"),
            u("<light-speed>", &["lspeed", "light"], "299792458"),
        ],
    },
    CategoryDef {
        name: "viscosity",
        numerator: &[KG],
        denominator: &[M, S],
        units: &[
            u("<poise>", &["P", "poise"], "0.1"),
            u("<reyn>", &["reyn"], "6894.75729"),
        ],
    },
    CategoryDef {
        name: "viscosityKinematic",
        numerator: &[M, M],
        denominator: &[S],
        units: &[u("<stoke>", &["St", "Stokes"], "1e-4")],
    },
    CategoryDef {
        name: "volume",
        numerator: &[M, M, M],
        denominator: &[],
        units: &[
            u("<barrels-us-petroleum>", &["bbl(us)", "bbl"], "0.158987295"),
            u("<barrels-uk>", &["bl(uk)", "bl(imp)"], "0.16365924"),
            u("<barrels-us-dry>", &["bl(usd)"], "0.115627124"),
            u("<barrels-us-liquid>", &["bl(usl)"], "0.119240471"),
            u("<bushels-us>", &["bu", "bsh", "bushel", "bushel(us)"], "0.035239072"),
            u("<bushels-uk>", &["bu(uk)", "bushel(uk)", "bushel(imp)"], "0.03636872"),
            u("<cup-metric>", &["cup", "cup(metric)"], "0.00025"),
            u("<cup-imperial>", &["cup(imp)"], "2.84130625e-4"),
            u("<cup-us-customary>", &["cup(usc)"], "2.365882365e-4"),
            u("<cup-us-legal>", &["cup(usl)"], "0.00024"),
            u("<dram-fluid>", &["dr(f)", "dram(f)"], "3.6966911953e-6"),
            u("<drum-metric-petroleum>", &["drum(mp)"], "0.2"),
            u("<drum-us-petroleum>", &["drum(usp)"], "0.208197648"),
            u("<fluid-ounce>", &["floz", "fluid-ounce", "fluid-ounces"], "2.84130625e-5"),
            u("<fluid-ounce-us>", &["oz(usl)", "oz(usf)", "floz(us)"], "2.95735296e-5"),
            u("<gallon-uk>", &["gal", "gal(imp)", "gal(uk)"], "0.00454609"),
            u("<gallon-us-dry>", &["gal(usd)", "gal(us dry)"], "0.004404884"),
            u("<gallon-us-liquid>", &["gal(us)", "gal(usl)", "gal(us fl)"], "0.003785412"),
            u("<liter>", &["l", "L", "liter", "liters", "litre", "litres"], "0.001"),
            u("<pecks-uk>", &["peck(uk)", "pecks(uk)"], "0.00909218"),
            u("<pecks-us>", &["peck(us)", "pecks(us)"], "0.008809768"),
            u("<pint>", &["pt", "pint", "pints", "pint(us fl)"], "0.000473176475"),
            u("<pint-uk>", &["pt(uk)", "pint(uk)", "pints(uk)"], "0.00056826125"),
            u("<pint-us-dry>", &["pt(usd)", "pint(usd)", "pints(usd)"], "0.000550610475"),
            u("<pint-us-liquid>", &["pt(usl)", "pint(usl)", "pints(usl)"], "0.000473176473"),
            u("<quart>", &["qt", "quart", "quarts"], "0.00094635295"),
            u("<quart-uk>", &["qt(uk)", "quart(uk)", "quarts(uk)"], "0.0011365225"),
            u("<quart-us-dry>", &["qt(usd)", "quart(usd)", "quarts(usd)"], "1.10122095e-3"),
            u("<quart-us-liquid>", &["qt(usl)", "quart(usl)", "quarts(usl)"], "9.46352946e-4"),
            u("<tablespoon-metric>", &["tb", "tbs", "tablespoon", "tablespoons"], "0.000015"),
            u("<tablespoon-uk>", &["tb(uk)", "tbs(uk)", "tablespoon(uk)", "tablespoons(uk)"], "1.420653125e-5"),
            u("<tablespoon-us>", &["tb(us)", "tbs(us)", "tablespoon(us)", "tablespoons(us)"], "1.478676478125e-5"),
            u("<teaspoon-metric>", &["tsp", "teaspoon", "teaspoons"], "0.000005"),
            u("<teaspoon-us>", &["tsp(us)", "teaspoon(us)", "teaspoons(us)"], "4.92892161e-6"),
        ],
    },
];
