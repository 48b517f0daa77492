use crate::{MoodleClient, MoodleResult, RpcParams};

use serde_json::Value;

/// Editor format id for HTML in `onlinetext_editor`
const FORMAT_HTML: i32 = 1;

impl MoodleClient {
    // =========================================================================
    // Course Operations
    // =========================================================================

    /// Courses the user is currently enrolled in and that are in progress
    pub async fn courses_in_progress(&self, token: &str) -> MoodleResult<Value> {
        let data = self
            .call(
                token,
                "core_course_get_enrolled_courses_by_timeline_classification",
                RpcParams::new().with("classification", "inprogress"),
            )
            .await?;
        Ok(non_null(data.get("courses").cloned()))
    }

    pub async fn course_contents(&self, token: &str, course_id: i64) -> MoodleResult<Value> {
        self.call(
            token,
            "core_course_get_contents",
            RpcParams::new().with("courseid", course_id),
        )
        .await
    }

    pub async fn course_grades(&self, token: &str, course_id: i64) -> MoodleResult<Value> {
        self.call(
            token,
            "gradereport_user_get_grade_items",
            RpcParams::new().with("courseid", course_id),
        )
        .await
    }

    /// Assignments of one course, unwrapped from `courses[0].assignments`
    pub async fn course_assignments(&self, token: &str, course_id: i64) -> MoodleResult<Value> {
        let data = self
            .call(
                token,
                "mod_assign_get_assignments",
                RpcParams::new().with("courseids[0]", course_id),
            )
            .await?;
        Ok(non_null(data.pointer("/courses/0/assignments").cloned()))
    }

    pub async fn course_forums(&self, token: &str, course_id: i64) -> MoodleResult<Value> {
        let data = self
            .call(
                token,
                "mod_forum_get_forums_by_courses",
                RpcParams::new().with("courseids[0]", course_id),
            )
            .await?;
        Ok(non_null(Some(data)))
    }

    // =========================================================================
    // Assignment Operations
    // =========================================================================

    /// Submission status for the token's owner. Resolves the user id first.
    pub async fn submission_status(&self, token: &str, assign_id: i64) -> MoodleResult<Value> {
        let info = self.site_info(token).await?;
        self.call(
            token,
            "mod_assign_get_submission_status",
            RpcParams::new()
                .with("assignid", assign_id)
                .with("userid", info.userid),
        )
        .await
    }

    /// Save an online-text submission draft
    pub async fn save_text_submission(
        &self,
        token: &str,
        assign_id: i64,
        text: &str,
    ) -> MoodleResult<Value> {
        self.call(
            token,
            "mod_assign_save_submission",
            RpcParams::new()
                .with("assignmentid", assign_id)
                .with("plugindata[onlinetext_editor][text]", text)
                .with("plugindata[onlinetext_editor][format]", FORMAT_HTML)
                .with("plugindata[onlinetext_editor][itemid]", 0),
        )
        .await
    }

    pub async fn submit_for_grading(&self, token: &str, assign_id: i64) -> MoodleResult<Value> {
        self.call(
            token,
            "mod_assign_submit_for_grading",
            RpcParams::new()
                .with("assignmentid", assign_id)
                .with("acceptsubmissionstatement", true),
        )
        .await
    }

    // =========================================================================
    // Forum Operations
    // =========================================================================

    pub async fn forum_discussions(&self, token: &str, forum_id: i64) -> MoodleResult<Value> {
        self.call(
            token,
            "mod_forum_get_forum_discussions",
            RpcParams::new().with("forumid", forum_id),
        )
        .await
    }

    pub async fn discussion_posts(&self, token: &str, discussion_id: i64) -> MoodleResult<Value> {
        self.call(
            token,
            "mod_forum_get_discussion_posts",
            RpcParams::new().with("discussionid", discussion_id),
        )
        .await
    }

    /// Reply to a post and subscribe the author to the discussion
    pub async fn reply_to_post(
        &self,
        token: &str,
        post_id: i64,
        subject: &str,
        message: &str,
    ) -> MoodleResult<Value> {
        self.call(
            token,
            "mod_forum_add_discussion_post",
            RpcParams::new()
                .with("postid", post_id)
                .with("subject", subject)
                .with("message", message)
                .with("options[0][name]", "discussionsubscribe")
                .with("options[0][value]", true),
        )
        .await
    }
}

/// Missing or null list fields become an empty array
fn non_null(value: Option<Value>) -> Value {
    match value {
        Some(Value::Null) | None => Value::Array(Vec::new()),
        Some(value) => value,
    }
}
