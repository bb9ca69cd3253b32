//! Prompt text for a completed three-card draw.

use crate::slate::Slot;

const PREAMBLE: &str = "你是一位专业塔罗占卜师。请你根据我抽到的三张塔罗牌（包含正位/逆位），为我做一次清晰、结构化、可执行建议导向的解读。";

const CARDS_HEADING: &str = "抽到的三张牌（按抽牌顺序）：";

const REQUESTS: [&str; 4] = [
    "1) 三张牌的综合主题",
    "2) 每张牌在此问题中的含义（分别说明）",
    "3) 可能的盲点/需要注意的地方",
    "4) 未来 7-30 天可执行的行动建议（尽量具体）",
];

/// One numbered card line, e.g. `1. 愚者（The Fool）- 正位`.
pub fn card_line(number: usize, slot: &Slot) -> String {
    format!(
        "{number}. {}（{}）- {}",
        slot.card.name_local,
        slot.card.name_canonical,
        slot.orientation()
    )
}

/// Render three picked slots, in pick order, into the reading prompt.
pub fn build_prompt(slots: [&Slot; 3]) -> String {
    let mut lines = vec![PREAMBLE.to_string(), String::new(), CARDS_HEADING.to_string()];
    lines.extend(
        slots
            .iter()
            .enumerate()
            .map(|(i, slot)| card_line(i + 1, slot)),
    );
    lines.push(String::new());
    lines.push("请输出：".to_string());
    lines.extend(REQUESTS.iter().map(|r| r.to_string()));
    lines.join("\n")
}
