use crate::deck::{Slide, Topic};

pub(super) const TOPIC: Topic = Topic {
    id: 3,
    name: "Trees (BST, Trie, Heap)",
    duration: "1 hour",
    slides: SLIDES,
};

const SLIDES: &[Slide] = &[
    Slide::Title {
        title: "Trees",
        subtitle: "Binary Search Trees, Tries & Heaps in JavaScript",
        description: "Hierarchical data structures for efficient operations",
    },
    Slide::Content {
        title: "What is a Tree?",
        points: &[
            "Non-linear hierarchical data structure",
            "Collection of nodes connected by edges",
            "**Root**: Top node with no parent",
            "**Leaf**: Node with no children",
            "**Height**: Longest path from root to leaf",
            "**Depth**: Distance from root to node",
        ],
        diagram: false,
    },
    Slide::Content {
        title: "Tree Terminology",
        points: &[
            "**Parent/Child**: Direct connection between nodes",
            "**Siblings**: Nodes with same parent",
            "**Ancestor/Descendant**: Indirect parent/child relationship",
            "**Subtree**: Tree formed by node and descendants",
            "**Degree**: Number of children a node has",
            "**Binary Tree**: Each node has at most 2 children",
        ],
        diagram: false,
    },
    Slide::Code {
        title: "Tree Node Structure",
        description: Some("Basic building block"),
        code: r#"// Binary Tree Node
class TreeNode {
  constructor(value) {
    this.value = value;
    this.left = null;
    this.right = null;
  }
}

// Create a simple tree
const root = new TreeNode(10);
root.left = new TreeNode(5);
root.right = new TreeNode(15);
root.left.left = new TreeNode(3);
root.left.right = new TreeNode(7);

//       10
//      /  \
//     5    15
//    / \
//   3   7"#,
    },
    Slide::Content {
        title: "Binary Search Tree (BST)",
        points: &[
            "Special binary tree with ordering property",
            "**Left subtree**: All values < parent",
            "**Right subtree**: All values > parent",
            "**No duplicates** (typically)",
            "Efficient search, insert, delete: O(log n) average",
            "Can degrade to O(n) if unbalanced",
        ],
        diagram: false,
    },
    Slide::Code {
        title: "BST Implementation - Class Structure",
        description: Some("Binary Search Tree with basic operations"),
        code: r#"class BinarySearchTree {
  constructor() {
    this.root = null;
  }

  // Check if tree is empty
  isEmpty() {
    return this.root === null;
  }

  // Insert a value
  insert(value) {
    const newNode = new TreeNode(value);

    if (this.isEmpty()) {
      this.root = newNode;
    } else {
      this.insertNode(this.root, newNode);
    }
  }

  insertNode(root, newNode) {
    if (newNode.value < root.value) {
      // Go left
      if (root.left === null) {
        root.left = newNode;
      } else {
        this.insertNode(root.left, newNode);
      }
    } else {
      // Go right
      if (root.right === null) {
        root.right = newNode;
      } else {
        this.insertNode(root.right, newNode);
      }
    }
  }
}"#,
    },
    Slide::Code {
        title: "BST - Search Operation",
        description: Some("Find if value exists - O(log n) average"),
        code: r#"// Search for a value
search(root, value) {
  // Base case: empty tree or not found
  if (!root) {
    return false;
  }

  // Found the value
  if (root.value === value) {
    return true;
  }

  // Search left or right subtree
  if (value < root.value) {
    return this.search(root.left, value);
  } else {
    return this.search(root.right, value);
  }
}

// Iterative version (more efficient)
searchIterative(value) {
  let current = this.root;

  while (current) {
    if (value === current.value) {
      return true;
    }

    current = value < current.value ?
              current.left : current.right;
  }

  return false;
}

// Usage
const bst = new BinarySearchTree();
bst.insert(10);
bst.insert(5);
bst.insert(15);
console.log(bst.search(bst.root, 5));   // true
console.log(bst.searchIterative(20));   // false"#,
    },
    Slide::Code {
        title: "BST Traversals - DFS",
        description: Some("Three ways to traverse: In-order, Pre-order, Post-order"),
        code: r#"// In-order: Left -> Root -> Right (gives sorted order)
inOrder(root, result = []) {
  if (root) {
    this.inOrder(root.left, result);
    result.push(root.value);
    this.inOrder(root.right, result);
  }
  return result;
}

// Pre-order: Root -> Left -> Right
preOrder(root, result = []) {
  if (root) {
    result.push(root.value);
    this.preOrder(root.left, result);
    this.preOrder(root.right, result);
  }
  return result;
}

// Post-order: Left -> Right -> Root
postOrder(root, result = []) {
  if (root) {
    this.postOrder(root.left, result);
    this.postOrder(root.right, result);
    result.push(root.value);
  }
  return result;
}

// Example with tree: 10, 5, 15, 3, 7
console.log(bst.inOrder(bst.root));    // [3, 5, 7, 10, 15]
console.log(bst.preOrder(bst.root));   // [10, 5, 3, 7, 15]
console.log(bst.postOrder(bst.root));  // [3, 7, 5, 15, 10]"#,
    },
    Slide::Code {
        title: "BST - Level Order Traversal (BFS)",
        description: Some("Visit nodes level by level using queue"),
        code: r#"// Breadth-First Search (BFS)
levelOrder() {
  if (this.isEmpty()) return [];

  const result = [];
  const queue = [this.root];

  while (queue.length > 0) {
    const node = queue.shift();
    result.push(node.value);

    if (node.left) queue.push(node.left);
    if (node.right) queue.push(node.right);
  }

  return result;
}

// Level-by-level output
levelOrderByLevel() {
  if (this.isEmpty()) return [];

  const result = [];
  const queue = [this.root];

  while (queue.length > 0) {
    const levelSize = queue.length;
    const currentLevel = [];

    for (let i = 0; i < levelSize; i++) {
      const node = queue.shift();
      currentLevel.push(node.value);

      if (node.left) queue.push(node.left);
      if (node.right) queue.push(node.right);
    }

    result.push(currentLevel);
  }

  return result;
}

console.log(bst.levelOrder());  // [10, 5, 15, 3, 7]"#,
    },
    Slide::Code {
        title: "BST - Min and Max Values",
        description: Some("Finding minimum and maximum values"),
        code: r#"// Find minimum value (leftmost node)
findMin(root = this.root) {
  if (!root) return null;

  // Keep going left
  while (root.left) {
    root = root.left;
  }

  return root.value;
}

// Find maximum value (rightmost node)
findMax(root = this.root) {
  if (!root) return null;

  // Keep going right
  while (root.right) {
    root = root.right;
  }

  return root.value;
}

// Recursive versions
findMinRecursive(root = this.root) {
  if (!root) return null;
  if (!root.left) return root.value;
  return this.findMinRecursive(root.left);
}

findMaxRecursive(root = this.root) {
  if (!root) return null;
  if (!root.right) return root.value;
  return this.findMaxRecursive(root.right);
}

console.log(bst.findMin());  // Smallest value
console.log(bst.findMax());  // Largest value"#,
    },
    Slide::Code {
        title: "BST - Delete Node",
        description: Some("Removing node from BST (complex operation)"),
        code: r#"// Delete a node from BST
delete(value) {
  this.root = this.deleteNode(this.root, value);
}

deleteNode(root, value) {
  if (!root) return null;

  if (value < root.value) {
    // Value in left subtree
    root.left = this.deleteNode(root.left, value);
  } else if (value > root.value) {
    // Value in right subtree
    root.right = this.deleteNode(root.right, value);
  } else {
    // Found the node to delete

    // Case 1: No children (leaf node)
    if (!root.left && !root.right) {
      return null;
    }

    // Case 2: One child
    if (!root.left) {
      return root.right;
    }
    if (!root.right) {
      return root.left;
    }

    // Case 3: Two children
    // Find min value in right subtree (in-order successor)
    root.value = this.findMin(root.right);
    // Delete the in-order successor
    root.right = this.deleteNode(root.right, root.value);
  }

  return root;
}

// Time: O(log n) average, O(n) worst"#,
    },
    Slide::Content {
        title: "Trie (Prefix Tree)",
        points: &[
            "Tree data structure for storing strings",
            "Each node represents a character",
            "Common prefix sharing for space efficiency",
            "Used in: Auto-complete, spell checkers, IP routing",
            "Fast prefix search: O(m) where m = word length",
            "Space trade-off for time efficiency",
        ],
        diagram: false,
    },
    Slide::Code {
        title: "Trie Node & Structure",
        description: Some("Building blocks of Trie"),
        code: r#"// Trie Node
class TrieNode {
  constructor() {
    this.children = {};    // Map of character -> TrieNode
    this.isEndOfWord = false;
  }
}

// Trie Class
class Trie {
  constructor() {
    this.root = new TrieNode();
  }

  // Insert a word into trie
  insert(word) {
    let node = this.root;

    for (let char of word) {
      // Create node if doesn't exist
      if (!node.children[char]) {
        node.children[char] = new TrieNode();
      }
      // Move to child node
      node = node.children[char];
    }

    // Mark end of word
    node.isEndOfWord = true;
  }
}

// Time: O(m), Space: O(m) where m = word length"#,
    },
    Slide::Code {
        title: "Trie - Search & Prefix",
        description: Some("Search for words and prefixes"),
        code: r#"// Search for exact word
search(word) {
  let node = this.root;

  for (let char of word) {
    if (!node.children[char]) {
      return false;  // Character not found
    }
    node = node.children[char];
  }

  return node.isEndOfWord;
}

// Check if any word starts with prefix
startsWith(prefix) {
  let node = this.root;

  for (let char of prefix) {
    if (!node.children[char]) {
      return false;
    }
    node = node.children[char];
  }

  return true;  // Prefix exists
}

// Usage
const trie = new Trie();
trie.insert("apple");
trie.insert("app");
trie.insert("application");

console.log(trie.search("app"));        // true
console.log(trie.search("appl"));       // false
console.log(trie.startsWith("app"));    // true
console.log(trie.startsWith("ban"));    // false

// Time: O(m) for all operations"#,
    },
    Slide::Code {
        title: "Trie - Auto-complete Feature",
        description: Some("Find all words with given prefix"),
        code: r#"// Get all words with given prefix
autoComplete(prefix) {
  let node = this.root;
  const results = [];

  // Navigate to prefix end
  for (let char of prefix) {
    if (!node.children[char]) {
      return results;  // No words with this prefix
    }
    node = node.children[char];
  }

  // DFS to find all words from this point
  this.findAllWords(node, prefix, results);
  return results;
}

findAllWords(node, currentWord, results) {
  if (node.isEndOfWord) {
    results.push(currentWord);
  }

  for (let char in node.children) {
    this.findAllWords(
      node.children[char],
      currentWord + char,
      results
    );
  }
}

// Usage
const trie = new Trie();
trie.insert("cat");
trie.insert("car");
trie.insert("card");
trie.insert("care");
trie.insert("careful");

console.log(trie.autoComplete("car"));
// Output: ["car", "card", "care", "careful"]"#,
    },
    Slide::Content {
        title: "Heap (Binary Heap)",
        points: &[
            "Complete binary tree with heap property",
            "**Max Heap**: Parent ≥ children (root is maximum)",
            "**Min Heap**: Parent ≤ children (root is minimum)",
            "Implemented using array (not pointers)",
            "Used in: Priority Queue, Heap Sort, Dijkstra's",
            "Insert/Delete: O(log n), Get Min/Max: O(1)",
        ],
        diagram: false,
    },
    Slide::Code {
        title: "Min Heap - Array Representation",
        description: Some("Understanding heap indexing"),
        code: r#"// Heap stored as array
// For node at index i:
// - Parent: Math.floor((i - 1) / 2)
// - Left Child: 2 * i + 1
// - Right Child: 2 * i + 2

class MinHeap {
  constructor() {
    this.heap = [];
  }

  // Helper methods for navigation
  getParentIndex(i) {
    return Math.floor((i - 1) / 2);
  }

  getLeftChildIndex(i) {
    return 2 * i + 1;
  }

  getRightChildIndex(i) {
    return 2 * i + 2;
  }

  // Helper to swap elements
  swap(i, j) {
    [this.heap[i], this.heap[j]] = [this.heap[j], this.heap[i]];
  }

  size() {
    return this.heap.length;
  }

  isEmpty() {
    return this.size() === 0;
  }
}"#,
    },
    Slide::Code {
        title: "Min Heap - Insert Operation",
        description: Some("Add element and bubble up"),
        code: r#"// Insert element into heap
insert(value) {
  // Add to end
  this.heap.push(value);

  // Bubble up to maintain heap property
  this.bubbleUp(this.size() - 1);
}

bubbleUp(index) {
  while (index > 0) {
    const parentIndex = this.getParentIndex(index);

    // If parent is smaller, heap property satisfied
    if (this.heap[parentIndex] <= this.heap[index]) {
      break;
    }

    // Swap with parent
    this.swap(index, parentIndex);
    index = parentIndex;
  }
}

// Usage
const minHeap = new MinHeap();
minHeap.insert(10);
minHeap.insert(5);
minHeap.insert(20);
minHeap.insert(1);

console.log(minHeap.heap);  // [1, 5, 20, 10]

//       1
//      / \
//     5   20
//    /
//   10

// Time: O(log n)"#,
    },
    Slide::Code {
        title: "Min Heap - Extract Min",
        description: Some("Remove and return minimum element"),
        code: r#"// Remove and return minimum (root)
extractMin() {
  if (this.isEmpty()) return null;

  if (this.size() === 1) {
    return this.heap.pop();
  }

  // Store min value
  const min = this.heap[0];

  // Move last element to root
  this.heap[0] = this.heap.pop();

  // Bubble down to restore heap property
  this.bubbleDown(0);

  return min;
}

bubbleDown(index) {
  while (true) {
    let smallest = index;
    const left = this.getLeftChildIndex(index);
    const right = this.getRightChildIndex(index);

    // Check left child
    if (left < this.size() &&
        this.heap[left] < this.heap[smallest]) {
      smallest = left;
    }

    // Check right child
    if (right < this.size() &&
        this.heap[right] < this.heap[smallest]) {
      smallest = right;
    }

    // If no swap needed, done
    if (smallest === index) break;

    this.swap(index, smallest);
    index = smallest;
  }
}

// Time: O(log n)"#,
    },
    Slide::Code {
        title: "Min Heap - Peek & Build",
        description: Some("Additional heap operations"),
        code: r#"// Get minimum without removing
peek() {
  if (this.isEmpty()) return null;
  return this.heap[0];
}

// Build heap from array (Heapify)
buildHeap(array) {
  this.heap = array;

  // Start from last non-leaf node
  const lastParent = Math.floor((this.size() - 2) / 2);

  // Bubble down each node
  for (let i = lastParent; i >= 0; i--) {
    this.bubbleDown(i);
  }
}

// Usage
const heap = new MinHeap();
heap.buildHeap([9, 5, 6, 2, 3, 7, 1, 4, 8]);

console.log(heap.peek());        // 1
console.log(heap.extractMin());  // 1
console.log(heap.extractMin());  // 2
console.log(heap.extractMin());  // 3

// buildHeap Time: O(n)
// This is more efficient than n insertions: O(n log n)"#,
    },
    Slide::Code {
        title: "Max Heap Implementation",
        description: Some("Opposite of Min Heap"),
        code: r#"class MaxHeap {
  constructor() {
    this.heap = [];
  }

  insert(value) {
    this.heap.push(value);
    this.bubbleUp(this.size() - 1);
  }

  bubbleUp(index) {
    while (index > 0) {
      const parent = Math.floor((index - 1) / 2);

      // Max heap: parent should be larger
      if (this.heap[parent] >= this.heap[index]) {
        break;
      }

      [this.heap[index], this.heap[parent]] =
        [this.heap[parent], this.heap[index]];

      index = parent;
    }
  }

  extractMax() {
    if (this.size() === 0) return null;
    if (this.size() === 1) return this.heap.pop();

    const max = this.heap[0];
    this.heap[0] = this.heap.pop();
    this.bubbleDown(0);
    return max;
  }

  size() {
    return this.heap.length;
  }
}

const maxHeap = new MaxHeap();
maxHeap.insert(10);
maxHeap.insert(20);
maxHeap.insert(5);
console.log(maxHeap.extractMax());  // 20"#,
    },
    Slide::Content {
        title: "Time & Space Complexity",
        points: &[
            "**BST Search/Insert/Delete**: O(log n) avg, O(n) worst",
            "**BST Traversals**: O(n) time, O(h) space",
            "**Trie Insert/Search**: O(m) where m = word length",
            "**Trie Space**: O(ALPHABET_SIZE * N * M)",
            "**Heap Insert/Delete**: O(log n)",
            "**Heap Peek**: O(1), Build Heap: O(n)",
        ],
        diagram: false,
    },
    Slide::Content {
        title: "Practice Problems",
        points: &[
            "1. Validate Binary Search Tree",
            "2. Lowest Common Ancestor in BST",
            "3. Convert sorted array to BST",
            "4. Implement word dictionary (Trie)",
            "5. Kth largest element using heap",
            "6. Merge K sorted lists (heap)",
            "7. Find median from data stream",
        ],
        diagram: false,
    },
];
