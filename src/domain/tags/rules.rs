//! Keyword categories used for automatic tagging

/// One keyword category: any keyword in the list maps to `tag`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagCategoryRule {
    /// Grouping the rule belongs to (emotion, growth, relationship, ...)
    pub category: &'static str,
    pub keywords: &'static [&'static str],
    /// Canonical tag emitted when any keyword matches
    pub tag: &'static str,
}

const fn rule(
    category: &'static str,
    keywords: &'static [&'static str],
    tag: &'static str,
) -> TagCategoryRule {
    TagCategoryRule {
        category,
        keywords,
        tag,
    }
}

/// Static keyword table, checked in order.
///
/// Keywords are matched as plain substrings. Short keywords such as "일" or
/// "비" therefore also fire inside longer words.
pub static TAG_CATEGORY_RULES: &[TagCategoryRule] = &[
    // 감정
    rule("감정", &["걱정", "불안", "스트레스", "우울", "답답"], "걱정"),
    rule("감정", &["행복", "기쁨", "즐거움", "신남", "만족"], "행복"),
    rule("감정", &["화남", "짜증", "분노", "열받", "속상"], "화남"),
    rule("감정", &["슬픔", "우울", "눈물", "아픔", "상처"], "슬픔"),
    rule("감정", &["평온", "차분", "안정", "고요", "평화"], "평온"),
    // 성장
    rule("성장", &["성장", "발전", "배움", "깨달음", "변화", "도전"], "성장"),
    rule("성장", &["노력", "열심히", "공부", "연습", "개선"], "노력"),
    rule("성장", &["목표", "계획", "꿈", "비전", "희망"], "목표"),
    // 관계
    rule("관계", &["가족", "부모", "형제", "자매"], "가족"),
    rule("관계", &["친구", "동료", "선배", "후배"], "친구"),
    rule("관계", &["연인", "남친", "여친", "사랑"], "연인"),
    rule("관계", &["갈등", "다툼", "싸움", "오해"], "갈등"),
    // 활동
    rule("활동", &["일", "업무", "회사", "직장", "프로젝트"], "일"),
    rule("활동", &["공부", "학습", "시험", "과제"], "공부"),
    rule("활동", &["운동", "헬스", "조깅", "요가", "산책"], "운동"),
    rule("활동", &["여행", "휴가", "나들이", "외출"], "여행"),
    rule("활동", &["취미", "독서", "영화", "음악", "게임"], "취미"),
    // 건강
    rule("건강", &["피곤", "졸림", "잠", "수면"], "피로"),
    rule("건강", &["아픔", "병", "감기", "두통"], "건강"),
    rule("건강", &["다이어트", "살", "체중", "식단"], "다이어트"),
    // 시간
    rule("시간", &["아침", "새벽", "오전"], "아침"),
    rule("시간", &["점심", "오후", "낮"], "오후"),
    rule("시간", &["저녁", "밤", "야간"], "저녁"),
    rule("시간", &["주말", "토요일", "일요일"], "주말"),
    // 날씨
    rule("날씨", &["비", "비오는", "장마"], "비"),
    rule("날씨", &["눈", "겨울", "추위"], "겨울"),
    rule("날씨", &["더위", "여름", "덥다"], "여름"),
    rule("날씨", &["봄", "꽃", "따뜻"], "봄"),
];
