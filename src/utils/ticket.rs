/// 号码显示为三位补零：`#007`、`#042`、`#1234`
pub fn format_ticket_number(number: i32) -> String {
    format!("#{number:03}")
}
