use crate::table::code_table;

code_table! {
    /// Languages known to the translator; the dictionary, predictor and
    /// speller each support a subset.
    ///
    /// `Autodetect` is the sentinel source language reported when the
    /// translator picked the source itself. Its code is empty.
    pub enum Language: str as "language" {
        Autodetect = ("", "Autodetect"),
        Azerbaijan = ("az", "Azerbaijan"),
        Afrikaans = ("af", "Afrikaans"),
        Albanian = ("sq", "Albanian"),
        Amharic = ("am", "Amharic"),
        Arabic = ("ar", "Arabic"),
        Armenian = ("hy", "Armenian"),
        Bashkir = ("ba", "Bashkir"),
        Basque = ("eu", "Basque"),
        Belarusian = ("be", "Belarusian"),
        Bengali = ("bn", "Bengali"),
        Bosnian = ("bs", "Bosnian"),
        Bulgarian = ("bg", "Bulgarian"),
        Burmese = ("my", "Burmese"),
        Catalan = ("ca", "Catalan"),
        Cebuano = ("ceb", "Cebuano"),
        Chinese = ("zh", "Chinese"),
        Chuvash = ("cv", "Chuvash"),
        Croatian = ("hr", "Croatian"),
        Czech = ("cs", "Czech"),
        Danish = ("da", "Danish"),
        Dutch = ("nl", "Dutch"),
        ElvishSindarin = ("sjn", "Elvish (Sindarin)"),
        Emoji = ("emj", "Emoji"),
        English = ("en", "English"),
        Esperanto = ("eo", "Esperanto"),
        Estonian = ("et", "Estonian"),
        Finnish = ("fi", "Finnish"),
        French = ("fr", "French"),
        Galician = ("gl", "Galician"),
        Georgian = ("ka", "Georgian"),
        German = ("de", "German"),
        Greek = ("el", "Greek"),
        Gujarati = ("gu", "Gujarati"),
        Haitian = ("ht", "Haitian"),
        Hebrew = ("he", "Hebrew"),
        HillMari = ("mrj", "Hill Mari"),
        Hindi = ("hi", "Hindi"),
        Hungarian = ("hu", "Hungarian"),
        Icelandic = ("is", "Icelandic"),
        Indonesian = ("id", "Indonesian"),
        Irish = ("ga", "Irish"),
        Italian = ("it", "Italian"),
        Japanese = ("ja", "Japanese"),
        Javanese = ("jv", "Javanese"),
        Kannada = ("kn", "Kannada"),
        Kazakh = ("kk", "Kazakh"),
        KazakhLatin = ("kazlat", "Kazakh (Latin)"),
        Khmer = ("km", "Khmer"),
        Korean = ("ko", "Korean"),
        Kyrgyz = ("ky", "Kyrgyz"),
        Laotian = ("lo", "Laotian"),
        Latin = ("la", "Latin"),
        Latvian = ("lv", "Latvian"),
        Lithuanian = ("lt", "Lithuanian"),
        Luxembourgish = ("lb", "Luxembourgish"),
        Macedonian = ("mk", "Macedonian"),
        Malagasy = ("mg", "Malagasy"),
        Malay = ("ms", "Malay"),
        Malayalam = ("ml", "Malayalam"),
        Maltese = ("mt", "Maltese"),
        Maori = ("mi", "Maori"),
        Marathi = ("mr", "Marathi"),
        Mari = ("mhr", "Mari"),
        Mongolian = ("mn", "Mongolian"),
        Nepali = ("ne", "Nepali"),
        Norwegian = ("no", "Norwegian"),
        Papiamento = ("pap", "Papiamento"),
        Persian = ("fa", "Persian"),
        Polish = ("pl", "Polish"),
        Portuguese = ("pt", "Portuguese"),
        Punjabi = ("pa", "Punjabi"),
        Romanian = ("ro", "Romanian"),
        Russian = ("ru", "Russian"),
        Scottish = ("gd", "Scottish"),
        Serbian = ("sr", "Serbian"),
        Sinhala = ("si", "Sinhala"),
        Slovakian = ("sk", "Slovakian"),
        Slovenian = ("sl", "Slovenian"),
        Spanish = ("es", "Spanish"),
        Sundanese = ("su", "Sundanese"),
        Swahili = ("sw", "Swahili"),
        Swedish = ("sv", "Swedish"),
        Tagalog = ("tl", "Tagalog"),
        Tajik = ("tg", "Tajik"),
        Tamil = ("ta", "Tamil"),
        Tatar = ("tt", "Tatar"),
        Telugu = ("te", "Telugu"),
        Thai = ("th", "Thai"),
        Turkish = ("tr", "Turkish"),
        Udmurt = ("udm", "Udmurt"),
        Ukrainian = ("uk", "Ukrainian"),
        Urdu = ("ur", "Urdu"),
        Uzbek = ("uz", "Uzbek"),
        UzbekCyrillic = ("uzbcyr", "Uzbek (Cyrillic)"),
        Vietnamese = ("vi", "Vietnamese"),
        Welsh = ("cy", "Welsh"),
        Xhosa = ("xh", "Xhosa"),
        Yiddish = ("yi", "Yiddish"),
        Yakut = ("sah", "Yakut"),
    }
}
