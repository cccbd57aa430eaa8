//! Sample posts inserted when a blog is installed with demo content enabled.

use chrono::Utc;
use sqlx::SqliteConnection;

use crate::models::{NewPost, PostStatus};
use crate::Result;

const DEMO_AUTHOR: &str = "demo";
const DEMO_IMAGE: &str = "road_big.jpg";

const DEMO_POSTS: [(&str, &str); 4] = [
    ("Coffee Pic", "coffee-pic"),
    ("On the road again", "on-the-road-again"),
    (
        "I couldn’t take any pictures but this was an amazing thing…",
        "i-couldnt-take-any-pictures",
    ),
    ("Shopping", "shopping"),
];

const EXCERPT: &str = "Enim labore aliqua consequat ut quis ad occaecat aliquip incididunt. \
Sunt nulla eu enim irure enim nostrud aliqua consectetur ad consectetur sunt ullamco officia. \
Ex officia laborum et consequat duis.";

const PARAGRAPHS: [&str; 3] = [
    "Excepteur reprehenderit sint exercitation ipsum consequat qui sit id velit elit. \
Velit anim eiusmod labore sit amet. Voluptate voluptate irure occaecat deserunt incididunt esse in. \
Sunt velit aliquip sunt elit ex nulla reprehenderit qui ut eiusmod ipsum do. \
Duis veniam reprehenderit laborum occaecat id proident nulla veniam. \
Duis enim deserunt voluptate aute veniam sint pariatur exercitation.",
    "Qui ullamco consectetur aute fugiat officia ullamco proident Lorem ad irure. \
Sint eu ut consectetur ut esse veniam laboris adipisicing aliquip minim anim labore commodo. \
Incididunt eu enim enim ipsum Lorem commodo tempor duis eu ullamco tempor elit occaecat sit. \
Culpa eu sit voluptate ullamco ad irure. Aliquip adipisicing dolore irure culpa aute enim.",
    "Cillum ullamco eu cupidatat excepteur Lorem minim sint quis officia irure irure sint fugiat nostrud. \
Pariatur Lorem irure excepteur Lorem non irure ea fugiat adipisicing esse nisi ullamco proident sint. \
Labore officia ex aliqua et occaecat velit dolor deserunt minim velit mollit irure. \
Est anim nostrud quis non fugiat duis cillum. Aliquip enim officia ad commodo id.",
];

/// Insert the demo posts, returning how many were written.
pub async fn seed_demo_content(conn: &mut SqliteConnection) -> Result<usize> {
    let content = PARAGRAPHS.join("\n\n<br />\n\n");
    let date = Utc::now();

    for (title, slug) in DEMO_POSTS {
        NewPost {
            author: DEMO_AUTHOR,
            title,
            slug,
            excerpt: EXCERPT,
            content: &content,
            image: DEMO_IMAGE,
            status: PostStatus::Publish,
            date,
        }
        .insert(&mut *conn)
        .await?;
    }

    tracing::debug!(count = DEMO_POSTS.len(), "seeded demo posts");
    Ok(DEMO_POSTS.len())
}
