use serde::Serialize;

/// Number of items on the SCL-90 form.
pub const ITEM_COUNT: usize = 90;

/// One questionnaire statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Item {
    pub id: u8,
    pub text: &'static str,
}

impl Item {
    const fn new(id: u8, text: &'static str) -> Self {
        Self { id, text }
    }
}

pub static ITEMS: [Item; ITEM_COUNT] = [
    Item::new(1, "头痛"),
    Item::new(2, "神经过敏，心中不踏实"),
    Item::new(3, "头脑中有不必要的想法或字句盘旋"),
    Item::new(4, "头晕和昏倒"),
    Item::new(5, "对异性的兴趣减退"),
    Item::new(6, "对旁人责备求全"),
    Item::new(7, "感到别人能控制您的思想"),
    Item::new(8, "责怪别人制造麻烦"),
    Item::new(9, "忘记性大"),
    Item::new(10, "容易烦恼和激动"),
    Item::new(11, "胸痛"),
    Item::new(12, "害怕空旷的场所或街道"),
    Item::new(13, "感到自己的精力下降，活动减慢"),
    Item::new(14, "想结束自己的生命"),
    Item::new(15, "听到旁人听不到的声音"),
    Item::new(16, "发抖"),
    Item::new(17, "感到大多数人都不可信任"),
    Item::new(18, "胃口不好"),
    Item::new(19, "容易哭泣"),
    Item::new(20, "同异性相处时感到害羞不自在"),
    Item::new(21, "感到受骗、中了圈套或有人想抓住您"),
    Item::new(22, "无缘无故地突然感到害怕"),
    Item::new(23, "自己不能控制地发脾气"),
    Item::new(24, "怕单独出门"),
    Item::new(25, "经常责怪自己"),
    Item::new(26, "腰痛"),
    Item::new(27, "感到难以完成任务"),
    Item::new(28, "感到孤独"),
    Item::new(29, "感到苦闷"),
    Item::new(30, "过分担忧"),
    Item::new(31, "对事物不感兴趣"),
    Item::new(32, "感到害怕"),
    Item::new(33, "我的感情容易受到伤害"),
    Item::new(34, "旁人能知道您的私下想法"),
    Item::new(35, "感到别人不理解您不同情您"),
    Item::new(36, "感到人们对您不友好，不喜欢您"),
    Item::new(37, "做事必须做得很慢以保证做得正确"),
    Item::new(38, "心跳得很厉害"),
    Item::new(39, "恶心或胃部不舒服"),
    Item::new(40, "感到比不上他人"),
    Item::new(41, "肌肉酸痛"),
    Item::new(42, "感到有人在监视您谈论您"),
    Item::new(43, "难以入睡"),
    Item::new(44, "做事必须反复检查"),
    Item::new(45, "难以作出决定"),
    Item::new(46, "怕乘电车、公共汽车、地铁或火车"),
    Item::new(47, "呼吸有困难"),
    Item::new(48, "一阵阵发冷或发热"),
    Item::new(49, "因为感到害怕而避开某些东西、场合或活动"),
    Item::new(50, "脑子变空了"),
    Item::new(51, "身体发麻或刺痛"),
    Item::new(52, "喉咙有梗塞感"),
    Item::new(53, "感到没有前途没有希望"),
    Item::new(54, "不能集中注意"),
    Item::new(55, "感到身体的某一部分软弱无力"),
    Item::new(56, "感到紧张或容易紧张"),
    Item::new(57, "感到手或脚发重"),
    Item::new(58, "想到死亡的事"),
    Item::new(59, "吃得太多"),
    Item::new(60, "当别人看着您或谈论您时感到不自在"),
    Item::new(61, "有一些不属于您自己的想法"),
    Item::new(62, "有想打人或伤害他人的冲动"),
    Item::new(63, "醒得太早"),
    Item::new(64, "必须反复洗手、点数目或触摸某些东西"),
    Item::new(65, "睡得不稳不深"),
    Item::new(66, "有想摔坏或破坏东西的冲动"),
    Item::new(67, "有一些别人没有的想法或念头"),
    Item::new(68, "感到对别人神经过敏"),
    Item::new(69, "在商店或电影院等人多的地方感到不自在"),
    Item::new(70, "感到任何事情都很困难"),
    Item::new(71, "一阵阵恐惧或惊恐"),
    Item::new(72, "感到在公共场合吃东西很不舒服"),
    Item::new(73, "经常与人争论"),
    Item::new(74, "单独一人时神经很紧张"),
    Item::new(75, "别人对您的成绩没有作出恰当的评价"),
    Item::new(76, "即使和别人在一起也感到孤单"),
    Item::new(77, "感到坐立不安心神不定"),
    Item::new(78, "感到自己没有什么价值"),
    Item::new(79, "感到熟悉的东西变成陌生或不像是真的"),
    Item::new(80, "大叫或摔东西"),
    Item::new(81, "害怕会在公共场合昏倒"),
    Item::new(82, "感到别人想占您的便宜"),
    Item::new(83, "为一些有关性的想法而很苦恼"),
    Item::new(84, "您认为应该因为自己的过错而受到惩罚"),
    Item::new(85, "感到要赶快把事情做完"),
    Item::new(86, "感到自己的身体有严重问题"),
    Item::new(87, "从未感到和其他人很亲近"),
    Item::new(88, "感到自己有罪"),
    Item::new(89, "感到自己的脑子有毛病"),
    Item::new(90, "感到自己的脑子有毛病"),
];

/// Looks up an item by its 1-based id.
#[must_use]
pub fn item(id: u8) -> Option<&'static Item> {
    let index = usize::from(id).checked_sub(1)?;
    ITEMS.get(index)
}
