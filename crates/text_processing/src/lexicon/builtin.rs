//! Built-in multilingual word lists
//!
//! Concept -> language -> surface forms. Language tags: `en`, `hi`
//! (Devanagari), `hi-Latn` (romanized Hindi), `gu` (Gujarati script),
//! `gu-Latn` (romanized Gujarati). Multi-word forms match as contiguous
//! token sequences.
//!
//! Keep forms disjoint between concepts of the same category;
//! `Lexicon::conflicts` reports violations.

use super::concept::{ActionKind, Concept, FilterKind, NoiseKind, TargetKind};

const EN: &str = "en";
const HI: &str = "hi";
const HI_LATN: &str = "hi-Latn";
const GU: &str = "gu";
const GU_LATN: &str = "gu-Latn";

type Entry = (Concept, &'static str, &'static [&'static str]);

#[rustfmt::skip]
pub(crate) const BUILTIN_ENTRIES: &[Entry] = &[
    // === ACTIONS (definition order is the tie-break order) ===
    (Concept::Action(ActionKind::Search), EN, &["search", "find", "look for", "look up", "lookup", "locate"]),
    (Concept::Action(ActionKind::Search), HI_LATN, &["dhundo", "dhoondo", "dhundhiye", "khojo", "talash"]),
    (Concept::Action(ActionKind::Search), HI, &["खोजो", "खोजें", "ढूंढो", "ढूँढो", "ढूंढें", "तलाश"]),
    (Concept::Action(ActionKind::Search), GU_LATN, &["shodho", "shodhi"]),
    (Concept::Action(ActionKind::Search), GU, &["શોધો", "શોધી"]),

    (Concept::Action(ActionKind::Show), EN, &["show", "display", "view", "open", "list"]),
    (Concept::Action(ActionKind::Show), HI_LATN, &["dikhao", "dikhaao", "dikha", "batao", "dekho"]),
    (Concept::Action(ActionKind::Show), HI, &["दिखाओ", "दिखाएं", "दिखाइए", "बताओ", "देखो"]),
    (Concept::Action(ActionKind::Show), GU_LATN, &["batavo", "dekhado", "jovo"]),
    (Concept::Action(ActionKind::Show), GU, &["બતાવો", "દેખાડો", "જુઓ"]),

    (Concept::Action(ActionKind::Create), EN, &["create", "add", "make", "register"]),
    (Concept::Action(ActionKind::Create), HI_LATN, &["banao", "jodo", "naya", "nayi"]),
    (Concept::Action(ActionKind::Create), HI, &["बनाओ", "बनाएं", "जोड़ो", "जोड़ें", "नया"]),
    (Concept::Action(ActionKind::Create), GU_LATN, &["banavo", "umero", "navu"]),
    (Concept::Action(ActionKind::Create), GU, &["બનાવો", "ઉમેરો", "નવું", "નવો"]),

    (Concept::Action(ActionKind::Update), EN, &["update", "edit", "change", "modify"]),
    (Concept::Action(ActionKind::Update), HI_LATN, &["badlo", "sudharo"]),
    (Concept::Action(ActionKind::Update), HI, &["बदलो", "बदलें", "अपडेट"]),
    (Concept::Action(ActionKind::Update), GU_LATN, &["badlavo"]),
    (Concept::Action(ActionKind::Update), GU, &["બદલો", "સુધારો"]),

    (Concept::Action(ActionKind::Delete), EN, &["delete", "remove", "erase"]),
    (Concept::Action(ActionKind::Delete), HI_LATN, &["hatao", "mitao"]),
    (Concept::Action(ActionKind::Delete), HI, &["हटाओ", "हटाएं", "मिटाओ"]),
    (Concept::Action(ActionKind::Delete), GU_LATN, &["kadho", "hatavo"]),
    (Concept::Action(ActionKind::Delete), GU, &["કાઢો", "હટાવો"]),

    (Concept::Action(ActionKind::Call), EN, &["call", "dial", "phone", "ring"]),
    (Concept::Action(ActionKind::Call), HI_LATN, &["lagao"]),
    (Concept::Action(ActionKind::Call), HI, &["कॉल", "फोन", "फ़ोन", "लगाओ"]),
    (Concept::Action(ActionKind::Call), GU_LATN, &["lagavo"]),
    (Concept::Action(ActionKind::Call), GU, &["ફોન", "કૉલ", "લગાવો"]),

    (Concept::Action(ActionKind::Send), EN, &["send", "share", "forward", "message"]),
    (Concept::Action(ActionKind::Send), HI_LATN, &["bhejo", "bhejiye"]),
    (Concept::Action(ActionKind::Send), HI, &["भेजो", "भेजें"]),
    (Concept::Action(ActionKind::Send), GU_LATN, &["moklo"]),
    (Concept::Action(ActionKind::Send), GU, &["મોકલો"]),

    // === TARGETS ===
    (Concept::Target(TargetKind::Leads), EN, &["leads", "lead", "prospects", "prospect", "enquiries", "enquiry"]),
    (Concept::Target(TargetKind::Leads), HI, &["लीड", "लीड्स"]),
    (Concept::Target(TargetKind::Leads), GU, &["લીડ", "લીડ્સ"]),

    (Concept::Target(TargetKind::Payments), EN, &["payments", "payment", "dues", "invoices", "invoice", "collections"]),
    (Concept::Target(TargetKind::Payments), HI_LATN, &["bhugtan", "bakaya"]),
    (Concept::Target(TargetKind::Payments), HI, &["भुगतान", "पेमेंट", "बकाया"]),
    (Concept::Target(TargetKind::Payments), GU_LATN, &["chukavani"]),
    (Concept::Target(TargetKind::Payments), GU, &["ચુકવણી", "પેમેન્ટ"]),

    (Concept::Target(TargetKind::Customers), EN, &["customers", "customer", "clients", "client", "buyers"]),
    (Concept::Target(TargetKind::Customers), HI_LATN, &["grahak"]),
    (Concept::Target(TargetKind::Customers), HI, &["ग्राहक", "कस्टमर"]),
    (Concept::Target(TargetKind::Customers), GU_LATN, &["grahako"]),
    (Concept::Target(TargetKind::Customers), GU, &["ગ્રાહક", "ગ્રાહકો"]),

    (Concept::Target(TargetKind::Orders), EN, &["orders", "order", "bookings", "booking"]),
    (Concept::Target(TargetKind::Orders), HI, &["ऑर्डर", "आर्डर"]),
    (Concept::Target(TargetKind::Orders), GU, &["ઓર્ડર"]),

    (Concept::Target(TargetKind::Inventory), EN, &["inventory", "stock", "products", "product", "items"]),
    (Concept::Target(TargetKind::Inventory), HI_LATN, &["maal", "samaan", "saman"]),
    (Concept::Target(TargetKind::Inventory), HI, &["स्टॉक", "माल", "सामान"]),
    (Concept::Target(TargetKind::Inventory), GU, &["સ્ટોક", "માલ", "સામાન"]),

    (Concept::Target(TargetKind::Analytics), EN, &["analytics", "report", "reports", "sales", "stats", "statistics"]),
    (Concept::Target(TargetKind::Analytics), HI_LATN, &["bikri"]),
    (Concept::Target(TargetKind::Analytics), HI, &["रिपोर्ट", "बिक्री"]),
    (Concept::Target(TargetKind::Analytics), GU_LATN, &["vechan"]),
    (Concept::Target(TargetKind::Analytics), GU, &["રિપોર્ટ", "વેચાણ"]),

    (Concept::Target(TargetKind::Dashboard), EN, &["dashboard", "overview", "summary", "home"]),
    (Concept::Target(TargetKind::Dashboard), HI, &["डैशबोर्ड"]),
    (Concept::Target(TargetKind::Dashboard), GU, &["ડેશબોર્ડ"]),

    // === FILTERS ===
    (Concept::Filter(FilterKind::Priority), EN, &["hot", "warm", "cold", "urgent", "important", "high priority", "low priority"]),
    (Concept::Filter(FilterKind::Priority), HI_LATN, &["garam", "thanda", "jaruri", "zaroori", "turant"]),
    (Concept::Filter(FilterKind::Priority), HI, &["गर्म", "गरम", "ठंडा", "जरूरी", "ज़रूरी", "तुरंत"]),
    (Concept::Filter(FilterKind::Priority), GU_LATN, &["tatkal"]),
    (Concept::Filter(FilterKind::Priority), GU, &["ગરમ", "ઠંડા", "જરૂરી", "તાત્કાલિક"]),

    (Concept::Filter(FilterKind::Status), EN, &["pending", "approved", "rejected", "completed", "paid", "unpaid", "overdue", "cancelled", "active", "closed"]),
    (Concept::Filter(FilterKind::Status), HI_LATN, &["baki", "baaki", "pura"]),
    (Concept::Filter(FilterKind::Status), HI, &["लंबित", "बाकी", "मंजूर", "स्वीकृत", "अस्वीकृत", "पूरा", "रद्द"]),
    (Concept::Filter(FilterKind::Status), GU_LATN, &["manjur"]),
    (Concept::Filter(FilterKind::Status), GU, &["બાકી", "મંજૂર", "નામંજૂર", "પૂર્ણ", "રદ"]),

    (Concept::Filter(FilterKind::Location), EN, &[
        "mumbai", "bombay", "delhi", "new delhi", "bangalore", "bengaluru", "chennai",
        "kolkata", "hyderabad", "pune", "ahmedabad", "surat", "vadodara", "baroda",
        "rajkot", "jaipur", "lucknow", "kanpur", "nagpur", "indore", "bhopal", "patna",
        "nashik", "gujarat", "maharashtra", "rajasthan", "karnataka", "tamil nadu",
        "kerala", "punjab", "bihar", "goa", "uttar pradesh", "madhya pradesh",
    ]),
    (Concept::Filter(FilterKind::Location), HI, &[
        "मुंबई", "दिल्ली", "नई दिल्ली", "बेंगलुरु", "चेन्नई", "कोलकाता", "हैदराबाद",
        "पुणे", "अहमदाबाद", "सूरत", "जयपुर", "लखनऊ", "इंदौर", "गुजरात", "महाराष्ट्र",
        "राजस्थान", "बिहार",
    ]),
    (Concept::Filter(FilterKind::Location), GU, &[
        "મુંબઈ", "દિલ્હી", "અમદાવાદ", "સુરત", "વડોદરા", "રાજકોટ", "ગાંધીનગર", "ગુજરાત",
        "મહારાષ્ટ્ર",
    ]),

    // === NOISE ===
    (Concept::Noise(NoiseKind::Connective), EN, &["of", "for", "in", "from", "to", "the", "a", "an", "with", "about", "and", "at"]),
    (Concept::Noise(NoiseKind::Connective), HI_LATN, &["ka", "ki", "ke", "ko", "mein", "se", "par", "aur", "wala", "wale", "wali"]),
    (Concept::Noise(NoiseKind::Connective), HI, &["का", "की", "के", "को", "में", "से", "पर", "और", "वाले", "वाली"]),
    (Concept::Noise(NoiseKind::Connective), GU_LATN, &["na", "ni", "nu", "no", "ma", "thi", "ane"]),
    (Concept::Noise(NoiseKind::Connective), GU, &["ના", "ની", "નું", "નો", "માં", "થી", "અને"]),

    (Concept::Noise(NoiseKind::Filler), EN, &["please", "can", "you", "will", "would", "could", "okay", "ok", "me", "my", "all", "just", "hey", "um", "uh"]),
    (Concept::Noise(NoiseKind::Filler), HI_LATN, &["zara", "jara", "kripya", "bhai", "sab", "sabhi", "mujhe", "mere", "hai", "hain"]),
    (Concept::Noise(NoiseKind::Filler), HI, &["कृपया", "ज़रा", "जरा", "मुझे", "मेरे", "सभी", "सब", "है", "हैं"]),
    (Concept::Noise(NoiseKind::Filler), GU_LATN, &["maherbani", "mane", "badha", "che"]),
    (Concept::Noise(NoiseKind::Filler), GU, &["કૃપા", "કૃપયા", "મને", "બધા", "છે"]),
];
