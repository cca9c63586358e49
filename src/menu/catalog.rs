//! The shop's static menu.
//!
//! Some drinks appear in two categories (e.g. 메가에이드 under 음료 and
//! 에이드&주스) so they show up under both buttons.

use crate::model::{Category, MenuItem};
use Category::*;

const MENU: &[(&str, Category)] = &[
    // 커피
    ("아메리카노", Coffee),
    ("메가리카노", Coffee),
    ("꿀아메리카노", Coffee),
    ("헤이즐넛아메리카노", Coffee),
    ("바닐라아메리카노", Coffee),
    ("카페라떼", Coffee),
    ("카푸치노", Coffee),
    ("바닐라라떼", Coffee),
    ("헤이즐넛라떼", Coffee),
    ("큐브라떼", Coffee),
    ("연유라떼", Coffee),
    ("티라미수라떼", Coffee),
    ("카라멜마끼아또", Coffee),
    ("카페모카", Coffee),
    ("콜드브루", Coffee),
    ("콜드브루라떼", Coffee),
    ("콜드브루디카페인", Coffee),
    ("콜드브루디카페인라떼", Coffee),
    // 디카페인
    ("디카페인 아메리카노", Decaf),
    ("디카페인 메가리카노", Decaf),
    ("디카페인 꿀아메리카노", Decaf),
    ("디카페인 헤이즐넛아메리카노", Decaf),
    ("디카페인 바닐라아메리카노", Decaf),
    ("디카페인 카페라떼", Decaf),
    ("디카페인 카푸치노", Decaf),
    ("디카페인 바닐라라떼", Decaf),
    ("디카페인 헤이즐넛라떼", Decaf),
    ("디카페인 연유라떼", Decaf),
    ("디카페인 티라미수라떼", Decaf),
    ("디카페인 카라멜마끼아또", Decaf),
    ("디카페인 카페모카", Decaf),
    // 음료
    ("고구마라떼", Beverage),
    ("곡물라떼", Beverage),
    ("녹차라떼", Beverage),
    ("딸기라떼", Beverage),
    ("로얄밀크티라떼", Beverage),
    ("토피넛라떼", Beverage),
    ("흑당라떼", Beverage),
    ("흑당버블라떼", Beverage),
    ("흑당밀크티라떼", Beverage),
    ("흑당버블밀크티라떼", Beverage),
    ("초코라떼", Beverage),
    ("메가초코", Beverage),
    ("오레오초코", Beverage),
    ("체리콕", Beverage),
    ("메가에이드", Beverage),
    ("매직에이드", Beverage),
    // 티
    ("사과유자차", Tea),
    ("허니자몽블랙티", Tea),
    ("유자차", Tea),
    ("레몬차", Tea),
    ("자몽차", Tea),
    ("복숭아아이스티", Tea),
    ("녹차", Tea),
    ("얼그레이", Tea),
    ("캐모마일", Tea),
    ("페퍼민트", Tea),
    // 에이드&주스
    ("레몬에이드", AdeJuice),
    ("블루레몬에이드", AdeJuice),
    ("자몽에이드", AdeJuice),
    ("메가에이드", AdeJuice),
    ("체리콕", AdeJuice),
    ("청포도에이드", AdeJuice),
    ("라임에이드", AdeJuice),
    ("유니콘매직에이드(핑크)", AdeJuice),
    ("유니콘매직에이드(블루)", AdeJuice),
    ("딸기주스", AdeJuice),
    ("딸기바나나주스", AdeJuice),
    ("오렌지주스", AdeJuice),
    ("샤인머스캣그린주스", AdeJuice),
    ("레드오렌지자몽주스", AdeJuice),
    // 스무디&프라페
    ("플레인요거트스무디", SmoothieFrappe),
    ("딸기요거트스무디", SmoothieFrappe),
    ("망고요거트스무디", SmoothieFrappe),
    ("블루베리요거트스무디", SmoothieFrappe),
    ("유니콘프라페", SmoothieFrappe),
    ("리얼초코프라페", SmoothieFrappe),
    ("쿠키프라페", SmoothieFrappe),
    ("민트프라페", SmoothieFrappe),
    ("커피프라페", SmoothieFrappe),
    ("녹차프라페", SmoothieFrappe),
    ("스트로베리치즈홀릭", SmoothieFrappe),
    ("퐁크러쉬(플레인)", SmoothieFrappe),
    ("퐁크러쉬(딸기)", SmoothieFrappe),
    ("퐁크러쉬(바나나)", SmoothieFrappe),
    ("퐁크러쉬(초코)", SmoothieFrappe),
    ("스모어블랙쿠키프라페", SmoothieFrappe),
];

/// The full menu in catalog order.
pub fn catalog() -> Vec<MenuItem> {
    MENU.iter()
        .map(|&(name, category)| MenuItem::new(name, category))
        .collect()
}

/// First catalog entry with this exact name.
pub fn find(name: &str) -> Option<MenuItem> {
    MENU.iter()
        .find(|(n, _)| *n == name)
        .map(|&(name, category)| MenuItem::new(name, category))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_has_items() {
        let menu = catalog();
        for category in Category::ALL {
            assert!(menu.iter().any(|item| item.category == category), "{category}");
        }
    }

    #[test]
    fn test_find_returns_first_listing() {
        let item = find("메가에이드").unwrap();
        assert_eq!(item.category, Category::Beverage);
        assert!(find("없는메뉴").is_none());
    }
}
