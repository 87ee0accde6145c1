//! Built-in emoji dataset

use super::category::EmojiCategory::{self, *};

/// Every built-in emoji name with its category, grouped by category.
/// Names are unique; image paths follow the asset layout and are derived from these.
pub const BUILTIN_EMOJIS: &[(&str, EmojiCategory)] = &[
    // Faces
    ("微笑", Face),
    ("撇嘴", Face),
    ("色", Face),
    ("发呆", Face),
    ("得意", Face),
    ("流泪", Face),
    ("害羞", Face),
    ("闭嘴", Face),
    ("睡", Face),
    ("大哭", Face),
    ("尴尬", Face),
    ("发怒", Face),
    ("调皮", Face),
    ("呲牙", Face),
    ("惊讶", Face),
    ("难过", Face),
    ("囧", Face),
    ("抓狂", Face),
    ("吐", Face),
    ("偷笑", Face),
    ("愉快", Face),
    ("白眼", Face),
    ("傲慢", Face),
    ("困", Face),
    ("惊恐", Face),
    ("憨笑", Face),
    ("悠闲", Face),
    ("咒骂", Face),
    ("疑问", Face),
    ("嘘", Face),
    ("晕", Face),
    ("衰", Face),
    ("骷髅", Face),
    ("敲打", Face),
    ("再见", Face),
    ("擦汗", Face),
    ("抠鼻", Face),
    ("鼓掌", Face),
    ("坏笑", Face),
    ("右哼哼", Face),
    ("鄙视", Face),
    ("委屈", Face),
    ("快哭了", Face),
    ("阴险", Face),
    ("亲亲", Face),
    ("可怜", Face),
    ("笑脸", Face),
    ("生病", Face),
    ("脸红", Face),
    ("破涕为笑", Face),
    ("恐惧", Face),
    ("失望", Face),
    ("无语", Face),
    ("嘿哈", Face),
    ("捂脸", Face),
    ("机智", Face),
    ("皱眉", Face),
    ("耶", Face),
    ("吃瓜", Face),
    ("加油", Face),
    ("汗", Face),
    ("天啊", Face),
    ("Emm", Face),
    ("社会社会", Face),
    ("旺柴", Face),
    ("好的", Face),
    ("打脸", Face),
    ("哇", Face),
    ("翻白眼", Face),
    ("666", Face),
    ("让我看看", Face),
    ("叹气", Face),
    ("苦涩", Face),
    ("裂开", Face),
    ("奸笑", Face),

    // Gestures
    ("握手", Gesture),
    ("胜利", Gesture),
    ("抱拳", Gesture),
    ("勾引", Gesture),
    ("拳头", Gesture),
    ("OK", Gesture),
    ("合十", Gesture),
    ("强", Gesture),
    ("拥抱", Gesture),
    ("弱", Gesture),

    // Animals
    ("猪头", Animal),
    ("跳跳", Animal),
    ("发抖", Animal),
    ("转圈", Animal),

    // Blessings and festivals
    ("庆祝", Blessing),
    ("礼物", Blessing),
    ("红包", Blessing),
    ("發", Blessing),
    ("福", Blessing),
    ("烟花", Blessing),
    ("爆竹", Blessing),

    // Everything else
    ("嘴唇", Other),
    ("爱心", Other),
    ("心碎", Other),
    ("啤酒", Other),
    ("咖啡", Other),
    ("蛋糕", Other),
    ("凋谢", Other),
    ("菜刀", Other),
    ("炸弹", Other),
    ("便便", Other),
    ("太阳", Other),
    ("月亮", Other),
    ("玫瑰", Other),
];
