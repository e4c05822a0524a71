//! 金额格式化工具
//!
//! 菜单价格使用 [`rust_decimal::Decimal`]，展示层按 de-DE 习惯格式化为
//! 整数欧元 (千位分隔符 '.'，无小数位)。

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// 将金额格式化为欧元字符串 (整数欧元，de-DE 千位分隔)
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use shared::money::format_euro;
///
/// assert_eq!(format_euro(Decimal::new(899, 2)), "9 €");
/// assert_eq!(format_euro(Decimal::new(132000, 2)), "1.320 €");
/// ```
pub fn format_euro(amount: Decimal) -> String {
    // 四舍五入到整数欧元
    let whole = amount.round().to_i128().unwrap_or(0);
    let negative = whole < 0;
    let digits = whole.unsigned_abs().to_string();

    // 千位分隔
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    if negative {
        format!("-{} €", grouped)
    } else {
        format!("{} €", grouped)
    }
}
