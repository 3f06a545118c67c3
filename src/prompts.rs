// Instruction strings sent to the completion API

pub const CLASSIFIER_SYSTEM_PROMPT: &str = "You are a classifier. One-word answers only.";

pub const TUTOR_SYSTEM_PROMPT: &str = "You are a JSON-only Kenyan tutor.";

pub const SUBJECT_CATEGORIES: [&str; 6] = [
    "mathematics",
    "science",
    "geography",
    "english",
    "history",
    "other",
];

pub const FALLBACK_SUBJECT: &str = "other";

const SHENG_RULES: &str = r#"
Standard Swahili → Sheng mapping examples:
- "ni nini" → "ni nini hio"
- "kwa hivyo" → "saa hivyo"
- "mfano" → "kama"
- "kwanza" → "starter pack"
- "halafu" → "then baadaye"
- "hatimaye" → "mwishowe"

Add Sheng phrases:
- Start: "Buda, si ni simple..."
- During: "Unaelewa point?"
- End: "Sawa? Uko tayari kupanda marks!"
"#;

pub fn subject_detection_prompt(question: &str) -> String {
    let categories = SUBJECT_CATEGORIES
        .iter()
        .map(|c| format!("- {c}"))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "\nAnalyze: \"{question}\"\n\n\
         Respond ONLY with subject category (lowercase single word):\n\
         {categories}\n"
    )
}

pub fn explanation_prompt(question: &str, subject: &str) -> String {
    let subject = if subject.is_empty() { FALLBACK_SUBJECT } else { subject };
    format!(
        r#"
Act as a Kenyan teacher explaining to a 14-year-old student.

CONTEXT:
- Subject: {subject}
- Question: {question}

{SHENG_RULES}

EXPLAIN IN THREE VERSIONS:

1. SIMPLE ENGLISH:
   - Use basic vocabulary (CEFR A2 level)
   - Include one relatable Kenyan analogy
   - Break into max 3 steps
   - Use bullet points with emojis

2. KISWAHILI:
   - Use standard Swahili
   - Use clear marking scheme steps
   - Add "Mfano:" with Kenyan context

3. SHENG:
   - Urban, fun tone with Sheng words
   - Must sound like a peer explaining
   - End with motivation

OUTPUT FORMAT (strict JSON):
{{
  "english": "string",
  "kiswahili": "string",
  "sheng": "string",
  "key_points": ["point 1", "point 2"],
  "common_mistakes": "string"
}}
Only output JSON. No explanation outside JSON.
"#
    )
}

pub fn is_known_subject(subject: &str) -> bool {
    SUBJECT_CATEGORIES.contains(&subject)
}
