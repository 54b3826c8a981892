//! Built-in named character references.
//!
//! The HTML 4 entity set: Latin-1, symbols and Greek, and the special
//! characters. Listed by block rather than by name; the table module sorts
//! them at compile time.

use crate::entry::EntityEntry;

/// Raw entity list in block order.
pub(crate) const SOURCE: [EntityEntry<'static>; 252] = [
    // ---- Latin-1 supplement ----------------------------------------------
    EntityEntry::new("nbsp", "&#160;"),
    EntityEntry::new("iexcl", "&#161;"),
    EntityEntry::new("cent", "&#162;"),
    EntityEntry::new("pound", "&#163;"),
    EntityEntry::new("curren", "&#164;"),
    EntityEntry::new("yen", "&#165;"),
    EntityEntry::new("brvbar", "&#166;"),
    EntityEntry::new("sect", "&#167;"),
    EntityEntry::new("uml", "&#168;"),
    EntityEntry::new("copy", "&#169;"),
    EntityEntry::new("ordf", "&#170;"),
    EntityEntry::new("laquo", "&#171;"),
    EntityEntry::new("not", "&#172;"),
    EntityEntry::new("shy", "&#173;"),
    EntityEntry::new("reg", "&#174;"),
    EntityEntry::new("macr", "&#175;"),
    EntityEntry::new("deg", "&#176;"),
    EntityEntry::new("plusmn", "&#177;"),
    EntityEntry::new("sup2", "&#178;"),
    EntityEntry::new("sup3", "&#179;"),
    EntityEntry::new("acute", "&#180;"),
    EntityEntry::new("micro", "&#181;"),
    EntityEntry::new("para", "&#182;"),
    EntityEntry::new("middot", "&#183;"),
    EntityEntry::new("cedil", "&#184;"),
    EntityEntry::new("sup1", "&#185;"),
    EntityEntry::new("ordm", "&#186;"),
    EntityEntry::new("raquo", "&#187;"),
    EntityEntry::new("frac14", "&#188;"),
    EntityEntry::new("frac12", "&#189;"),
    EntityEntry::new("frac34", "&#190;"),
    EntityEntry::new("iquest", "&#191;"),
    EntityEntry::new("Agrave", "&#192;"),
    EntityEntry::new("Aacute", "&#193;"),
    EntityEntry::new("Acirc", "&#194;"),
    EntityEntry::new("Atilde", "&#195;"),
    EntityEntry::new("Auml", "&#196;"),
    EntityEntry::new("Aring", "&#197;"),
    EntityEntry::new("AElig", "&#198;"),
    EntityEntry::new("Ccedil", "&#199;"),
    EntityEntry::new("Egrave", "&#200;"),
    EntityEntry::new("Eacute", "&#201;"),
    EntityEntry::new("Ecirc", "&#202;"),
    EntityEntry::new("Euml", "&#203;"),
    EntityEntry::new("Igrave", "&#204;"),
    EntityEntry::new("Iacute", "&#205;"),
    EntityEntry::new("Icirc", "&#206;"),
    EntityEntry::new("Iuml", "&#207;"),
    EntityEntry::new("ETH", "&#208;"),
    EntityEntry::new("Ntilde", "&#209;"),
    EntityEntry::new("Ograve", "&#210;"),
    EntityEntry::new("Oacute", "&#211;"),
    EntityEntry::new("Ocirc", "&#212;"),
    EntityEntry::new("Otilde", "&#213;"),
    EntityEntry::new("Ouml", "&#214;"),
    EntityEntry::new("times", "&#215;"),
    EntityEntry::new("Oslash", "&#216;"),
    EntityEntry::new("Ugrave", "&#217;"),
    EntityEntry::new("Uacute", "&#218;"),
    EntityEntry::new("Ucirc", "&#219;"),
    EntityEntry::new("Uuml", "&#220;"),
    EntityEntry::new("Yacute", "&#221;"),
    EntityEntry::new("THORN", "&#222;"),
    EntityEntry::new("szlig", "&#223;"),
    EntityEntry::new("agrave", "&#224;"),
    EntityEntry::new("aacute", "&#225;"),
    EntityEntry::new("acirc", "&#226;"),
    EntityEntry::new("atilde", "&#227;"),
    EntityEntry::new("auml", "&#228;"),
    EntityEntry::new("aring", "&#229;"),
    EntityEntry::new("aelig", "&#230;"),
    EntityEntry::new("ccedil", "&#231;"),
    EntityEntry::new("egrave", "&#232;"),
    EntityEntry::new("eacute", "&#233;"),
    EntityEntry::new("ecirc", "&#234;"),
    EntityEntry::new("euml", "&#235;"),
    EntityEntry::new("igrave", "&#236;"),
    EntityEntry::new("iacute", "&#237;"),
    EntityEntry::new("icirc", "&#238;"),
    EntityEntry::new("iuml", "&#239;"),
    EntityEntry::new("eth", "&#240;"),
    EntityEntry::new("ntilde", "&#241;"),
    EntityEntry::new("ograve", "&#242;"),
    EntityEntry::new("oacute", "&#243;"),
    EntityEntry::new("ocirc", "&#244;"),
    EntityEntry::new("otilde", "&#245;"),
    EntityEntry::new("ouml", "&#246;"),
    EntityEntry::new("divide", "&#247;"),
    EntityEntry::new("oslash", "&#248;"),
    EntityEntry::new("ugrave", "&#249;"),
    EntityEntry::new("uacute", "&#250;"),
    EntityEntry::new("ucirc", "&#251;"),
    EntityEntry::new("uuml", "&#252;"),
    EntityEntry::new("yacute", "&#253;"),
    EntityEntry::new("thorn", "&#254;"),
    EntityEntry::new("yuml", "&#255;"),

    // ---- Latin extended-B ------------------------------------------------
    EntityEntry::new("fnof", "&#402;"),

    // ---- Greek -----------------------------------------------------------
    EntityEntry::new("Alpha", "&#913;"),
    EntityEntry::new("Beta", "&#914;"),
    EntityEntry::new("Gamma", "&#915;"),
    EntityEntry::new("Delta", "&#916;"),
    EntityEntry::new("Epsilon", "&#917;"),
    EntityEntry::new("Zeta", "&#918;"),
    EntityEntry::new("Eta", "&#919;"),
    EntityEntry::new("Theta", "&#920;"),
    EntityEntry::new("Iota", "&#921;"),
    EntityEntry::new("Kappa", "&#922;"),
    EntityEntry::new("Lambda", "&#923;"),
    EntityEntry::new("Mu", "&#924;"),
    EntityEntry::new("Nu", "&#925;"),
    EntityEntry::new("Xi", "&#926;"),
    EntityEntry::new("Omicron", "&#927;"),
    EntityEntry::new("Pi", "&#928;"),
    EntityEntry::new("Rho", "&#929;"),
    EntityEntry::new("Sigma", "&#931;"),
    EntityEntry::new("Tau", "&#932;"),
    EntityEntry::new("Upsilon", "&#933;"),
    EntityEntry::new("Phi", "&#934;"),
    EntityEntry::new("Chi", "&#935;"),
    EntityEntry::new("Psi", "&#936;"),
    EntityEntry::new("Omega", "&#937;"),
    EntityEntry::new("alpha", "&#945;"),
    EntityEntry::new("beta", "&#946;"),
    EntityEntry::new("gamma", "&#947;"),
    EntityEntry::new("delta", "&#948;"),
    EntityEntry::new("epsilon", "&#949;"),
    EntityEntry::new("zeta", "&#950;"),
    EntityEntry::new("eta", "&#951;"),
    EntityEntry::new("theta", "&#952;"),
    EntityEntry::new("iota", "&#953;"),
    EntityEntry::new("kappa", "&#954;"),
    EntityEntry::new("lambda", "&#955;"),
    EntityEntry::new("mu", "&#956;"),
    EntityEntry::new("nu", "&#957;"),
    EntityEntry::new("xi", "&#958;"),
    EntityEntry::new("omicron", "&#959;"),
    EntityEntry::new("pi", "&#960;"),
    EntityEntry::new("rho", "&#961;"),
    EntityEntry::new("sigmaf", "&#962;"),
    EntityEntry::new("sigma", "&#963;"),
    EntityEntry::new("tau", "&#964;"),
    EntityEntry::new("upsilon", "&#965;"),
    EntityEntry::new("phi", "&#966;"),
    EntityEntry::new("chi", "&#967;"),
    EntityEntry::new("psi", "&#968;"),
    EntityEntry::new("omega", "&#969;"),
    EntityEntry::new("thetasym", "&#977;"),
    EntityEntry::new("upsih", "&#978;"),
    EntityEntry::new("piv", "&#982;"),

    // ---- General punctuation ---------------------------------------------
    EntityEntry::new("bull", "&#8226;"),
    EntityEntry::new("hellip", "&#8230;"),
    EntityEntry::new("prime", "&#8242;"),
    EntityEntry::new("Prime", "&#8243;"),
    EntityEntry::new("oline", "&#8254;"),
    EntityEntry::new("frasl", "&#8260;"),

    // ---- Letterlike symbols ----------------------------------------------
    EntityEntry::new("weierp", "&#8472;"),
    EntityEntry::new("image", "&#8465;"),
    EntityEntry::new("real", "&#8476;"),
    EntityEntry::new("trade", "&#8482;"),
    EntityEntry::new("alefsym", "&#8501;"),

    // ---- Arrows ----------------------------------------------------------
    EntityEntry::new("larr", "&#8592;"),
    EntityEntry::new("uarr", "&#8593;"),
    EntityEntry::new("rarr", "&#8594;"),
    EntityEntry::new("darr", "&#8595;"),
    EntityEntry::new("harr", "&#8596;"),
    EntityEntry::new("crarr", "&#8629;"),
    EntityEntry::new("lArr", "&#8656;"),
    EntityEntry::new("uArr", "&#8657;"),
    EntityEntry::new("rArr", "&#8658;"),
    EntityEntry::new("dArr", "&#8659;"),
    EntityEntry::new("hArr", "&#8660;"),

    // ---- Mathematical operators ------------------------------------------
    EntityEntry::new("forall", "&#8704;"),
    EntityEntry::new("part", "&#8706;"),
    EntityEntry::new("exist", "&#8707;"),
    EntityEntry::new("empty", "&#8709;"),
    EntityEntry::new("nabla", "&#8711;"),
    EntityEntry::new("isin", "&#8712;"),
    EntityEntry::new("notin", "&#8713;"),
    EntityEntry::new("ni", "&#8715;"),
    EntityEntry::new("prod", "&#8719;"),
    EntityEntry::new("sum", "&#8721;"),
    EntityEntry::new("minus", "&#8722;"),
    EntityEntry::new("lowast", "&#8727;"),
    EntityEntry::new("radic", "&#8730;"),
    EntityEntry::new("prop", "&#8733;"),
    EntityEntry::new("infin", "&#8734;"),
    EntityEntry::new("ang", "&#8736;"),
    EntityEntry::new("and", "&#8743;"),
    EntityEntry::new("or", "&#8744;"),
    EntityEntry::new("cap", "&#8745;"),
    EntityEntry::new("cup", "&#8746;"),
    EntityEntry::new("int", "&#8747;"),
    EntityEntry::new("there4", "&#8756;"),
    EntityEntry::new("sim", "&#8764;"),
    EntityEntry::new("cong", "&#8773;"),
    EntityEntry::new("asymp", "&#8776;"),
    EntityEntry::new("ne", "&#8800;"),
    EntityEntry::new("equiv", "&#8801;"),
    EntityEntry::new("le", "&#8804;"),
    EntityEntry::new("ge", "&#8805;"),
    EntityEntry::new("sub", "&#8834;"),
    EntityEntry::new("sup", "&#8835;"),
    EntityEntry::new("nsub", "&#8836;"),
    EntityEntry::new("sube", "&#8838;"),
    EntityEntry::new("supe", "&#8839;"),
    EntityEntry::new("oplus", "&#8853;"),
    EntityEntry::new("otimes", "&#8855;"),
    EntityEntry::new("perp", "&#8869;"),
    EntityEntry::new("sdot", "&#8901;"),

    // ---- Miscellaneous technical -----------------------------------------
    EntityEntry::new("lceil", "&#8968;"),
    EntityEntry::new("rceil", "&#8969;"),
    EntityEntry::new("lfloor", "&#8970;"),
    EntityEntry::new("rfloor", "&#8971;"),
    EntityEntry::new("lang", "&#9001;"),
    EntityEntry::new("rang", "&#9002;"),

    // ---- Geometric shapes and card suits ---------------------------------
    EntityEntry::new("loz", "&#9674;"),
    EntityEntry::new("spades", "&#9824;"),
    EntityEntry::new("clubs", "&#9827;"),
    EntityEntry::new("hearts", "&#9829;"),
    EntityEntry::new("diams", "&#9830;"),

    // ---- XML predefined --------------------------------------------------
    EntityEntry::new("quot", "&#34;"),
    EntityEntry::new("amp", "&#38;"),
    EntityEntry::new("lt", "&#60;"),
    EntityEntry::new("gt", "&#62;"),

    // ---- Latin extended and spacing modifiers ----------------------------
    EntityEntry::new("OElig", "&#338;"),
    EntityEntry::new("oelig", "&#339;"),
    EntityEntry::new("Scaron", "&#352;"),
    EntityEntry::new("scaron", "&#353;"),
    EntityEntry::new("Yuml", "&#376;"),
    EntityEntry::new("circ", "&#710;"),
    EntityEntry::new("tilde", "&#732;"),

    // ---- Spacing, joiners and direction marks ----------------------------
    EntityEntry::new("ensp", "&#8194;"),
    EntityEntry::new("emsp", "&#8195;"),
    EntityEntry::new("thinsp", "&#8201;"),
    EntityEntry::new("zwnj", "&#8204;"),
    EntityEntry::new("zwj", "&#8205;"),
    EntityEntry::new("lrm", "&#8206;"),
    EntityEntry::new("rlm", "&#8207;"),

    // ---- Dashes, quotes and daggers --------------------------------------
    EntityEntry::new("ndash", "&#8211;"),
    EntityEntry::new("mdash", "&#8212;"),
    EntityEntry::new("lsquo", "&#8216;"),
    EntityEntry::new("rsquo", "&#8217;"),
    EntityEntry::new("sbquo", "&#8218;"),
    EntityEntry::new("ldquo", "&#8220;"),
    EntityEntry::new("rdquo", "&#8221;"),
    EntityEntry::new("bdquo", "&#8222;"),
    EntityEntry::new("dagger", "&#8224;"),
    EntityEntry::new("Dagger", "&#8225;"),
    EntityEntry::new("permil", "&#8240;"),
    EntityEntry::new("lsaquo", "&#8249;"),
    EntityEntry::new("rsaquo", "&#8250;"),

    // ---- Currency --------------------------------------------------------
    EntityEntry::new("euro", "&#8364;"),
];
