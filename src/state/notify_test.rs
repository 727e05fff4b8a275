use super::*;

#[test]
fn no_notice_initially() {
    assert_eq!(NotificationState::default().current(), None);
}

#[test]
fn success_notice_is_shown() {
    let mut notices = NotificationState::default();
    notices.success("Issue reported");
    let notice = notices.current().unwrap();
    assert_eq!(notice.kind, NoticeKind::Success);
    assert_eq!(notice.text, "Issue reported");
}

#[test]
fn new_notice_replaces_the_current_one() {
    let mut notices = NotificationState::default();
    notices.success("first");
    notices.error("second");
    let notice = notices.current().unwrap();
    assert_eq!(notice.kind, NoticeKind::Error);
    assert_eq!(notice.text, "second");
}

#[test]
fn dismiss_clears() {
    let mut notices = NotificationState::default();
    notices.error("oops");
    notices.dismiss();
    assert_eq!(notices.current(), None);
}

#[test]
fn kind_titles() {
    assert_eq!(NoticeKind::Success.title(), "Success");
    assert_eq!(NoticeKind::Error.title(), "Error");
}
