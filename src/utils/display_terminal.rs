//! 터미널 출력 포맷팅 유틸리티
//!
//! 명령줄 실행 결과(목록 옵션, 알림, 검증 결과)를 사람이 읽기 쉬운 형태로 출력합니다.

use crate::ui::SelectOption;

/// 박스 형태로 둘러싸인 제목을 출력합니다
///
/// # Examples
///
/// ```rust,ignore
/// use form_utils::utils::display_terminal::print_boxed_title;
///
/// print_boxed_title("Regions");
/// ```
///
/// Output:
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║                     Regions                      ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn print_boxed_title(title: &str) {
    // 고정 너비 50칸 사용 (박스 내부 콘텐츠)
    let content_width = 50;
    let border = "═".repeat(content_width);

    println!("╔{}╗", border);
    println!("║{:^50}║", title);
    println!("╚{}╝", border);
}

/// 목록 옵션 한 줄을 표시용 문자열로 만듭니다.
///
/// 빈 옵션은 `(blank)`로 표시하고, 값과 표시 이름이 다르면 둘 다 보여줍니다.
pub fn format_option_line(index: usize, option: &SelectOption) -> String {
    if option.is_blank() {
        format!("   {:>2}. (blank)", index)
    } else if option.value == option.label {
        format!("   {:>2}. {}", index, option.value)
    } else {
        format!("   {:>2}. {} [{}]", index, option.label, option.value)
    }
}

/// 목록의 모든 옵션을 번호와 함께 출력합니다.
///
/// Output:
/// ```text
///     0. (blank)
///     1. North
///     2. South
/// ```
pub fn print_option_list(options: &[SelectOption]) {
    for (index, option) in options.iter().enumerate() {
        println!("{}", format_option_line(index, option));
    }
}

/// 사용자 알림을 표준 에러로 출력합니다.
///
/// 여러 줄 메시지는 줄마다 들여쓰기하여 출력합니다.
pub fn print_notification(field: Option<&str>, message: &str) {
    match field {
        Some(field) => eprintln!("⚠ [{}]", field),
        None => eprintln!("⚠"),
    }
    for line in message.lines().filter(|l| !l.trim().is_empty()) {
        eprintln!("   {}", line);
    }
}

/// 검증 결과를 체크 표시와 함께 출력합니다.
///
/// Output:
/// ```text
/// ✓ date: 03/01/2024
/// ✗ time: 13:00 PM
/// ```
pub fn print_check_result(kind: &str, value: &str, passed: bool) {
    let mark = if passed { "✓" } else { "✗" };
    println!("{} {}: {}", mark, kind, value);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_option_line() {
        assert_eq!(format_option_line(0, &SelectOption::blank()), "    0. (blank)");
        assert_eq!(format_option_line(1, &SelectOption::new("A", "A")), "    1. A");
        assert_eq!(
            format_option_line(12, &SelectOption::new("NW", "North West")),
            "   12. North West [NW]"
        );
    }
}
