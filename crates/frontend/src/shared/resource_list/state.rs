use contracts::shared::error::ApiError;
use contracts::shared::pagination::{ListResponse, PaginationMeta};

/// Номер выданного запроса списка
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    Applied,
    /// Ошибка: прежние строки и метаданные сохранены
    Failed,
    /// Ответ на устаревший запрос, ничего не изменено
    Stale,
}

/// Строки, метаданные и флаг загрузки одного списка.
///
/// Применяется только ответ на последний выданный запрос.
#[derive(Debug, Clone, PartialEq)]
pub struct ListState<R> {
    pub rows: Vec<R>,
    pub meta: PaginationMeta,
    pub loading: bool,
    pub error: Option<String>,
    issued: u64,
}

impl<R> Default for ListState<R> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            meta: PaginationMeta::default(),
            loading: false,
            error: None,
            issued: 0,
        }
    }
}

impl<R> ListState<R> {
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.issued += 1;
        self.loading = true;
        FetchTicket(self.issued)
    }

    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        ticket.0 == self.issued
    }

    pub fn apply(
        &mut self,
        ticket: FetchTicket,
        result: Result<ListResponse<R>, ApiError>,
    ) -> ApplyOutcome {
        if !self.is_current(ticket) {
            return ApplyOutcome::Stale;
        }
        self.loading = false;
        match result {
            Ok(response) => {
                self.rows = response.data;
                self.meta = response.meta.pagination;
                self.error = None;
                ApplyOutcome::Applied
            }
            Err(e) => {
                self.error = Some(e.user_message());
                ApplyOutcome::Failed
            }
        }
    }

    pub fn range_label(&self) -> String {
        self.meta.range_label(self.rows.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::pagination::ListMeta;

    fn page(rows: Vec<u32>, page: u32, total: u32) -> Result<ListResponse<u32>, ApiError> {
        Ok(ListResponse {
            data: rows,
            meta: ListMeta {
                pagination: PaginationMeta {
                    page,
                    page_size: 10,
                    page_count: total.div_ceil(10),
                    total,
                },
            },
        })
    }

    #[test]
    fn test_success_replaces_rows_and_meta() {
        let mut state = ListState::default();
        let t = state.begin_fetch();
        assert!(state.loading);
        assert_eq!(state.apply(t, page(vec![1, 2, 3], 1, 3)), ApplyOutcome::Applied);
        assert!(!state.loading);
        assert_eq!(state.rows, vec![1, 2, 3]);
        assert_eq!(state.meta.total, 3);
    }

    #[test]
    fn test_failure_keeps_previous_rows() {
        let mut state = ListState::default();
        let t = state.begin_fetch();
        state.apply(t, page(vec![1, 2], 1, 2));

        let t = state.begin_fetch();
        let outcome = state.apply(t, Err(ApiError::Network("offline".into())));
        assert_eq!(outcome, ApplyOutcome::Failed);
        assert!(!state.loading);
        assert_eq!(state.rows, vec![1, 2]);
        assert_eq!(state.meta.total, 2);
        assert!(state.error.is_some());
    }

    #[test]
    fn test_last_request_wins() {
        let mut state = ListState::default();
        let first = state.begin_fetch();
        let second = state.begin_fetch();

        assert_eq!(state.apply(second, page(vec![20], 2, 11)), ApplyOutcome::Applied);
        assert_eq!(state.apply(first, page(vec![10], 1, 11)), ApplyOutcome::Stale);
        assert_eq!(state.rows, vec![20]);
        assert_eq!(state.meta.page, 2);
    }

    #[test]
    fn test_stale_response_does_not_clear_loading() {
        let mut state = ListState::default();
        let first = state.begin_fetch();
        let _second = state.begin_fetch();
        state.apply(first, page(vec![1], 1, 1));
        assert!(state.loading);
        assert!(state.rows.is_empty());
    }

    #[test]
    fn test_range_label() {
        let mut state = ListState::default();
        assert_eq!(state.range_label(), "No rows");
        let t = state.begin_fetch();
        state.apply(t, page((11..=20).collect(), 2, 25));
        assert_eq!(state.range_label(), "Mostrando 11 a 20 de 25 registros");
    }
}
