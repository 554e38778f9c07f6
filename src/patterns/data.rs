//! 내장 접두사/접미사/어근 데이터
//!
//! 순서가 곧 우선순위입니다. 접사는 먼저 나온 항목이 매칭되므로
//! 항목을 옮기면 분해 결과가 바뀝니다.

pub const BUILTIN_PREFIXES: &[(&str, &str)] = &[
    ("ab-", "away, off"),
    ("ad-", "to, toward"),
    ("ante-", "before"),
    ("anti-", "against"),
    ("auto-", "self"),
    ("bi-", "two"),
    ("circum-", "around"),
    ("co-", "together"),
    ("contra-", "against"),
    ("de-", "remove, down"),
    ("dis-", "apart, not"),
    ("ex-", "out"),
    ("extra-", "beyond"),
    ("in-", "in, into"),
    ("inter-", "between"),
    ("intra-", "within"),
    ("mis-", "wrong, bad"),
    ("non-", "not"),
    ("over-", "excessive"),
    ("post-", "after"),
    ("pre-", "before"),
    ("pro-", "forward"),
    ("re-", "again"),
    ("semi-", "half"),
    ("sub-", "under"),
    ("super-", "above, beyond"),
    ("trans-", "across"),
    ("un-", "not, non"),
    ("under-", "below"),
    ("uni-", "one"),
];

pub const BUILTIN_SUFFIXES: &[(&str, &str)] = &[
    ("-able", "able to be"),
    ("-ible", "able to be"),
    ("-al", "adjective suffix"),
    ("-ance", "noun suffix"),
    ("-ence", "noun suffix"),
    ("-ant", "adjective suffix"),
    ("-ent", "adjective suffix"),
    ("-ary", "adjective suffix"),
    ("-ery", "noun suffix"),
    ("-ful", "full of"),
    ("-ic", "adjective suffix"),
    ("-ical", "adjective suffix"),
    ("-ism", "doctrine, practice"),
    ("-ist", "one who"),
    ("-ity", "noun suffix"),
    ("-ive", "adjective suffix"),
    ("-less", "without"),
    ("-ly", "adverb suffix"),
    ("-ment", "noun suffix"),
    ("-ness", "noun suffix"),
    ("-ous", "adjective suffix"),
    ("-ship", "state, condition"),
    ("-tion", "noun suffix"),
    ("-sion", "noun suffix"),
    ("-ure", "noun suffix"),
];

pub const BUILTIN_ROOTS: &[(&str, &str)] = &[
    ("act", "to do, act"),
    ("anim", "life, mind"),
    ("aud", "to hear"),
    ("bio", "life"),
    ("cap", "to take, seize"),
    ("ced", "to go"),
    ("cept", "to take, receive"),
    ("chron", "time"),
    ("cid", "to cut, kill"),
    ("cred", "to believe"),
    ("dict", "to say"),
    ("duc", "to lead"),
    ("fac", "to do, make"),
    ("fer", "to carry, bear"),
    ("fid", "to trust"),
    ("form", "shape"),
    ("gen", "to produce"),
    ("geo", "earth"),
    ("graph", "to write"),
    ("ject", "to throw"),
    ("jud", "to judge"),
    ("lect", "to choose"),
    ("log", "speech, study"),
    ("luc", "light"),
    ("man", "hand"),
    ("mit", "to send"),
    ("mov", "to move"),
    ("path", "feeling, disease"),
    ("ped", "foot"),
    ("phon", "sound"),
    ("port", "to carry"),
    ("pos", "to place"),
    ("press", "to press"),
    ("psych", "mind"),
    ("rupt", "to break"),
    ("scrib", "to write"),
    ("sect", "to cut"),
    ("sent", "to feel"),
    ("solut", "to loosen"),
    ("solv", "to solve"),
    ("spect", "to look"),
    ("struct", "to build"),
    ("tact", "to touch"),
    ("ten", "to hold"),
    ("tract", "to pull"),
    ("ven", "to come"),
    ("vers", "to turn"),
    ("vid", "to see"),
    ("vis", "to see"),
    ("voc", "voice, to call"),
];
