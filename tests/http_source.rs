use std::net::SocketAddr;
use std::time::Duration;

use calendar_summary::calendar::HttpEventSource;
use calendar_summary::error::{SourceError, SummaryError};
use calendar_summary::summary::{build_week_summary, EmptyDayPolicy, WeekSummary};
use chrono::NaiveDate;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

const SYNC_DAY: &str = r#"[{"durationInMinutes":15,"title":"Sync"}]"#;

/// Minimal events API: 500 for `failing_date`, one 15 minute event for every other date.
async fn serve_events(failing_date: Option<&'static str>) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            let Ok((stream, _)) = listener.accept().await else {
                break;
            };
            tokio::spawn(answer(stream, failing_date));
        }
    });

    addr
}

async fn answer(mut stream: TcpStream, failing_date: Option<&'static str>) {
    let mut request = Vec::new();
    let mut chunk = [0u8; 1024];
    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut chunk).await {
            Ok(0) | Err(_) => return,
            Ok(n) => request.extend_from_slice(&chunk[..n]),
        }
    }

    let request_line = String::from_utf8_lossy(&request)
        .lines()
        .next()
        .unwrap_or_default()
        .to_string();
    assert!(request_line.starts_with("GET /events?date="), "{request_line}");

    let fails = failing_date.is_some_and(|date| request_line.contains(&format!("date={date}")));
    let (status, body) = if fails {
        ("500 Internal Server Error", "boom")
    } else {
        ("200 OK", SYNC_DAY)
    };
    let response = format!(
        "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    let _ = stream.write_all(response.as_bytes()).await;
    let _ = stream.shutdown().await;
}

fn jan(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
}

#[tokio::test]
async fn fetches_a_week_over_http() {
    let addr = serve_events(None).await;
    let source = HttpEventSource::new(&format!("http://{addr}/"), Duration::from_secs(5)).unwrap();

    let days = build_week_summary(jan(1), &source, EmptyDayPolicy::Placeholder)
        .await
        .unwrap();

    assert_eq!(days.len(), 7);
    assert!(days.iter().all(|d| d.event_count == 1 && d.longest_event_title == "Sync"));
    let week = WeekSummary::aggregate(&days).unwrap();
    assert_eq!((week.total_event_count, week.total_duration), (7, 105));
}

#[tokio::test]
async fn server_error_for_one_day_fails_the_week() {
    let addr = serve_events(Some("2024-01-04")).await;
    let source = HttpEventSource::new(&format!("http://{addr}"), Duration::from_secs(5)).unwrap();

    let err = build_week_summary(jan(1), &source, EmptyDayPolicy::Placeholder)
        .await
        .unwrap_err();

    match err {
        SummaryError::Fetch {
            date,
            source: SourceError::Status { date: status_date, status },
        } => {
            assert_eq!(date, jan(4));
            assert_eq!(status_date, jan(4));
            assert_eq!(status.as_u16(), 500);
        }
        other => panic!("expected a status failure, got {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_api_is_a_transport_error() {
    // Bind then drop so nothing is listening on the port.
    let addr = TcpListener::bind("127.0.0.1:0")
        .await
        .unwrap()
        .local_addr()
        .unwrap();
    let source = HttpEventSource::new(&format!("http://{addr}"), Duration::from_secs(2)).unwrap();

    let err = build_week_summary(jan(1), &source, EmptyDayPolicy::Placeholder)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        SummaryError::Fetch {
            source: SourceError::Http(_),
            ..
        }
    ));
}
