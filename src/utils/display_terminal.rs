//! 터미널 출력 포맷팅 유틸리티
//!
//! 서버 기동 과정에서 사용되는 터미널 출력 함수들을 제공합니다.
//! 박스 형태의 제목, 진행 단계 표시, 실효 설정 요약을 출력합니다.

/// 박스 형태로 둘러싸인 제목을 출력합니다
///
/// # Examples
///
/// ```rust,ignore
/// use crate::utils::display_terminal::print_boxed_title;
///
/// print_boxed_title("Meeting Enrollment");
/// ```
///
/// Output:
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║                Meeting Enrollment                ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn print_boxed_title(title: &str) {
    println!("{}", boxed_title(title));
}

fn boxed_title(title: &str) -> String {
    // 고정 너비 50칸 사용 (박스 내부 콘텐츠)
    let content_width = 50;
    let border = "═".repeat(content_width);

    format!("╔{}╗\n║{:^50}║\n╚{}╝", border, title, border)
}

/// 진행 단계 시작을 표시합니다
///
/// ```text
/// → Step 2: 저장소 초기화
/// ```
pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

pub fn print_step_complete(step: u8, description: &str) {
    println!("✓ Step {}: {}", step, description);
}

pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 기동 시 출력할 실효 설정
#[derive(Debug, Clone)]
pub struct StartupSummary {
    pub environment: String,
    pub bind_address: String,
    pub http_workers: usize,
    pub store_backend: String,
    pub enrollment_workers: usize,
    pub batch_timeout: String,
    pub rate_limit: String,
}

/// 실효 설정 요약을 박스 제목과 함께 출력합니다
pub fn print_startup_summary(summary: &StartupSummary) {
    println!();
    print_boxed_title("🚀 MEETING ENROLLMENT SERVICE");
    for (name, value) in summary_lines(summary) {
        print_sub_task(name, &value);
    }
    println!();
}

fn summary_lines(summary: &StartupSummary) -> Vec<(&'static str, String)> {
    vec![
        ("Environment", summary.environment.clone()),
        ("Bind", summary.bind_address.clone()),
        ("HTTP workers", summary.http_workers.to_string()),
        ("Store", summary.store_backend.clone()),
        ("Enrollment workers", summary.enrollment_workers.to_string()),
        ("Batch timeout", summary.batch_timeout.clone()),
        ("Rate limit", summary.rate_limit.clone()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boxed_title_lines_have_equal_width() {
        let rendered = boxed_title("Meeting Enrollment");
        let widths: Vec<usize> = rendered.lines().map(|l| l.chars().count()).collect();

        assert_eq!(widths.len(), 3);
        assert!(widths.iter().all(|&w| w == widths[0]));
    }

    #[test]
    fn test_summary_lists_every_setting() {
        let summary = StartupSummary {
            environment: "development".to_string(),
            bind_address: "0.0.0.0:5000".to_string(),
            http_workers: 4,
            store_backend: "memory".to_string(),
            enrollment_workers: 4,
            batch_timeout: "30s".to_string(),
            rate_limit: "100/s (burst 200)".to_string(),
        };

        let lines = summary_lines(&summary);

        assert_eq!(lines.len(), 7);
        assert!(lines.contains(&("Store", "memory".to_string())));
    }
}
